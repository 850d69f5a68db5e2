use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::paths::{config_json_path, read_json_file, saved_ideas_path};

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";
pub const DEFAULT_HYDRATION_DELAY_MS: u64 = 1000;
/// Roughly the quota browsers grant a single origin's local storage.
pub const DEFAULT_STORAGE_MAX_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub http_proxy: String,
    #[serde(default)]
    pub https_proxy: String,
    pub api_key: Option<String>,
    pub api_base: Option<String>,
    pub text_model: Option<String>,
    pub image_model: Option<String>,
    /// Pause inserted between consecutive image calls.
    pub hydration_delay_ms: Option<u64>,
    pub storage_path: Option<PathBuf>,
    pub storage_max_bytes: Option<usize>,
}

const CONFIG_FILE_PATH: &str = "config.toml";

impl Config {
    /// Config with every field unset, ignoring files and environment.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load `~/.junk-art/config.json`, falling back to `./config.toml`,
    /// then apply environment overrides.
    pub fn new() -> Self {
        let mut config = Self::load_from(&config_json_path(), Path::new(CONFIG_FILE_PATH));
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config
    }

    pub fn load_from(json_path: &Path, toml_path: &Path) -> Self {
        match read_json_file::<Config>(json_path) {
            Ok(Some(config)) => return config,
            Ok(None) => {}
            Err(e) => log::warn!("Ignoring config: {}", e),
        }

        if toml_path.exists() {
            if let Ok(content) = std::fs::read_to_string(toml_path) {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => return config,
                    Err(e) => log::warn!("Ignoring unparsable {}: {}", toml_path.display(), e),
                }
            }
        }

        Self::empty()
    }

    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(http_proxy) = lookup("HTTP_PROXY") {
            self.http_proxy = http_proxy;
        }
        if let Some(https_proxy) = lookup("HTTPS_PROXY") {
            self.https_proxy = https_proxy;
        }
        if let Some(api_key) = lookup("API_KEY") {
            self.api_key = Some(api_key);
        }
        if let Some(api_base) = lookup("API_BASE") {
            self.api_base = Some(api_base);
        }
        if let Some(model) = lookup("TEXT_MODEL") {
            self.text_model = Some(model);
        }
        if let Some(model) = lookup("IMAGE_MODEL") {
            self.image_model = Some(model);
        }
        if let Some(delay) = lookup("HYDRATION_DELAY_MS") {
            match delay.trim().parse::<u64>() {
                Ok(ms) => self.hydration_delay_ms = Some(ms),
                Err(_) => log::warn!("Ignoring invalid HYDRATION_DELAY_MS value {delay:?}"),
            }
        }
        if let Some(path) = lookup("SAVED_IDEAS_PATH") {
            self.storage_path = Some(PathBuf::from(path));
        }
    }

    /// The API key, if one is configured and non-blank.
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn api_base(&self) -> &str {
        self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    pub fn text_model(&self) -> &str {
        self.text_model.as_deref().unwrap_or(DEFAULT_TEXT_MODEL)
    }

    pub fn image_model(&self) -> &str {
        self.image_model.as_deref().unwrap_or(DEFAULT_IMAGE_MODEL)
    }

    pub fn hydration_delay(&self) -> Duration {
        Duration::from_millis(self.hydration_delay_ms.unwrap_or(DEFAULT_HYDRATION_DELAY_MS))
    }

    pub fn saved_ideas_path(&self) -> PathBuf {
        self.storage_path.clone().unwrap_or_else(saved_ideas_path)
    }

    pub fn storage_max_bytes(&self) -> usize {
        self.storage_max_bytes.unwrap_or(DEFAULT_STORAGE_MAX_BYTES)
    }
}
