use craft_core::CraftIdea;
use storage_manager::{BlobStorage, SaveOutcome, SavedIdeasStore, StorageError};

/// What the saved-ideas page is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserView {
    List,
    Detail { index: usize, idea: CraftIdea },
}

/// Saved-ideas page state: the store plus the idea being viewed, if any.
#[derive(Debug)]
pub struct SavedIdeasBrowser<S: BlobStorage> {
    store: SavedIdeasStore<S>,
    view: BrowserView,
}

impl<S: BlobStorage> SavedIdeasBrowser<S> {
    pub fn new(store: SavedIdeasStore<S>) -> Self {
        Self {
            store,
            view: BrowserView::List,
        }
    }

    pub fn store(&self) -> &SavedIdeasStore<S> {
        &self.store
    }

    pub fn view(&self) -> &BrowserView {
        &self.view
    }

    /// Open the lean saved idea at `index`.
    pub fn open(&mut self, index: usize) -> Result<CraftIdea, StorageError> {
        let idea = self
            .store
            .get(index)
            .cloned()
            .ok_or(StorageError::IndexOutOfRange {
                index,
                len: self.store.len(),
            })?;
        self.view = BrowserView::Detail {
            index,
            idea: idea.clone(),
        };
        Ok(idea)
    }

    /// Replace the viewed idea with its hydrated copy.
    pub fn show_hydrated(&mut self, hydrated: CraftIdea) {
        if let BrowserView::Detail { idea, .. } = &mut self.view {
            if idea.same_entity(&hydrated) {
                *idea = hydrated;
            }
        }
    }

    pub fn back(&mut self) {
        self.view = BrowserView::List;
    }

    pub fn save(&mut self, idea: &CraftIdea) -> Result<SaveOutcome, StorageError> {
        self.store.save_idea(idea)
    }

    /// Delete the idea at `index`. Deleting the viewed idea returns to the list;
    /// a viewed idea further down keeps pointing at the same entry.
    pub fn delete(&mut self, index: usize) -> Result<CraftIdea, StorageError> {
        let removed = self.store.delete(index)?;
        if let BrowserView::Detail { index: viewed, .. } = &mut self.view {
            if *viewed > index {
                *viewed -= 1;
            } else if *viewed == index {
                self.view = BrowserView::List;
            }
        }
        Ok(removed)
    }

    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.store.clear()?;
        self.view = BrowserView::List;
        Ok(())
    }
}
