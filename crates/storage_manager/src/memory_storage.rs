use crate::{BlobStorage, Result, StorageError};

/// Blob kept in memory, optionally capped like a browser storage quota.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    blob: Option<String>,
    max_bytes: Option<usize>,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
            ..Self::default()
        }
    }

    pub fn with_capacity(mut self, max_bytes: usize) -> Self {
        self.max_bytes = Some(max_bytes);
        self
    }

    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }

    /// Number of successful writes.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl BlobStorage for MemoryStorage {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.blob.clone())
    }

    fn write(&mut self, blob: &str) -> Result<()> {
        if let Some(capacity) = self.max_bytes {
            if blob.len() > capacity {
                return Err(StorageError::CapacityExceeded {
                    needed: blob.len(),
                    capacity,
                });
            }
        }
        self.blob = Some(blob.to_string());
        self.writes += 1;
        Ok(())
    }
}
