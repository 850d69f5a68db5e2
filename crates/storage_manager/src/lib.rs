pub mod error;
pub mod file_storage;
pub mod memory_storage;
pub mod store;

pub use error::{Result, StorageError};
pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;
pub use store::{SaveOutcome, SavedIdeasStore};

/// A single named JSON blob, read and replaced as a whole.
pub trait BlobStorage {
    /// `Ok(None)` when nothing has been written yet.
    fn read(&self) -> Result<Option<String>>;

    fn write(&mut self, blob: &str) -> Result<()>;
}

impl<S: BlobStorage + ?Sized> BlobStorage for Box<S> {
    fn read(&self) -> Result<Option<String>> {
        (**self).read()
    }

    fn write(&mut self, blob: &str) -> Result<()> {
        (**self).write(blob)
    }
}
