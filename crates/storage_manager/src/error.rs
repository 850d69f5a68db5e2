use thiserror::Error;

pub type Result<T> = std::result::Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Could not access saved ideas: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not serialize saved ideas: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(
        "Could not save the idea. Your storage might be full ({needed} of {capacity} bytes). Try deleting some old ideas."
    )]
    CapacityExceeded { needed: usize, capacity: usize },

    #[error("No saved idea at position {index} (have {len})")]
    IndexOutOfRange { index: usize, len: usize },
}
