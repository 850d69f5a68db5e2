use craft_core::CraftIdea;

use crate::{BlobStorage, Result, StorageError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// An idea with the same title is already in the list; nothing was written.
    AlreadySaved,
}

/// The user's saved ideas, newest first, mirrored to a [`BlobStorage`].
///
/// Every mutation writes the complete new list before touching the
/// in-memory copy, so a failed write leaves both sides as they were.
#[derive(Debug)]
pub struct SavedIdeasStore<S: BlobStorage> {
    storage: S,
    ideas: Vec<CraftIdea>,
}

impl<S: BlobStorage> SavedIdeasStore<S> {
    pub fn load(storage: S) -> Self {
        let ideas = match storage.read() {
            Ok(Some(blob)) => match serde_json::from_str::<Vec<CraftIdea>>(&blob) {
                Ok(ideas) => ideas.iter().map(CraftIdea::to_lean).collect(),
                Err(e) => {
                    log::warn!("Saved ideas are unreadable, starting empty: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Failed to load saved ideas, starting empty: {}", e);
                Vec::new()
            }
        };
        log::debug!("Loaded {} saved ideas", ideas.len());
        Self { storage, ideas }
    }

    pub fn ideas(&self) -> &[CraftIdea] {
        &self.ideas
    }

    pub fn get(&self, index: usize) -> Option<&CraftIdea> {
        self.ideas.get(index)
    }

    pub fn len(&self) -> usize {
        self.ideas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ideas.is_empty()
    }

    pub fn is_saved(&self, title: &str) -> bool {
        self.ideas.iter().any(|idea| idea.title == title)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Store the lean form of `idea` at the front of the list.
    pub fn save_idea(&mut self, idea: &CraftIdea) -> Result<SaveOutcome> {
        if self.is_saved(&idea.title) {
            return Ok(SaveOutcome::AlreadySaved);
        }

        let mut next = Vec::with_capacity(self.ideas.len() + 1);
        next.push(idea.to_lean());
        next.extend(self.ideas.iter().cloned());
        self.commit(next)?;

        log::info!("Saved idea '{}'", idea.title);
        Ok(SaveOutcome::Saved)
    }

    pub fn delete(&mut self, index: usize) -> Result<CraftIdea> {
        if index >= self.ideas.len() {
            return Err(StorageError::IndexOutOfRange {
                index,
                len: self.ideas.len(),
            });
        }

        let mut next = self.ideas.clone();
        let removed = next.remove(index);
        self.commit(next)?;

        log::info!("Deleted saved idea '{}'", removed.title);
        Ok(removed)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.commit(Vec::new())?;
        log::info!("Cleared saved ideas");
        Ok(())
    }

    fn commit(&mut self, next: Vec<CraftIdea>) -> Result<()> {
        let blob = serde_json::to_string(&next)?;
        if let Err(e) = self.storage.write(&blob) {
            log::error!("Failed to persist saved ideas: {}", e);
            return Err(e);
        }
        self.ideas = next;
        Ok(())
    }
}
