use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use craft_core::Config;

use crate::{BlobStorage, Result, StorageError};

/// Blob persisted as a single JSON file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
    max_bytes: Option<usize>,
}

impl FileStorage {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            max_bytes: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.saved_ideas_path()).with_max_bytes(config.storage_max_bytes())
    }

    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = Some(max_bytes);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl BlobStorage for FileStorage {
    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
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

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp_path = self.temp_path();
        let written = fs::File::create(&temp_path).and_then(|mut file| {
            file.write_all(blob.as_bytes())?;
            file.sync_all()
        });
        if let Err(error) = written.and_then(|()| fs::rename(&temp_path, &self.path)) {
            let _ = fs::remove_file(&temp_path);
            return Err(error.into());
        }

        log::debug!("Wrote {} bytes to {}", blob.len(), self.path.display());
        Ok(())
    }
}
