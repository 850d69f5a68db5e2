use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

const APP_DIR_NAME: &str = ".junk-art";
const SAVED_IDEAS_FILE: &str = "savedCraftIdeas.json";

#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Application data directory (~/.junk-art)
pub fn app_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
}

/// Path of config.json
pub fn config_json_path() -> PathBuf {
    app_dir().join("config.json")
}

/// Default location of the saved ideas blob
pub fn saved_ideas_path() -> PathBuf {
    app_dir().join(SAVED_IDEAS_FILE)
}

pub fn ensure_app_dir() -> std::io::Result<PathBuf> {
    let dir = app_dir();
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Deserialize a JSON file, `Ok(None)` when it does not exist.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, ConfigFileError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigFileError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| ConfigFileError::Parse {
            path: path.to_path_buf(),
            source,
        })
}
