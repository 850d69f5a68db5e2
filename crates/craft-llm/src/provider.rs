use async_trait::async_trait;
use craft_core::{GenerationConfig, ImagePayload};
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LLMError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("API key is not configured. Please set the API_KEY environment variable.")]
    MissingCredential,
}

impl LLMError {
    /// Whether the provider refused the call because of a rate limit or
    /// exhausted quota.
    pub fn is_rate_limited(&self) -> bool {
        match self {
            LLMError::RateLimited(_) => true,
            LLMError::Api(message) => mentions_rate_limit(message),
            _ => false,
        }
    }
}

pub(crate) fn mentions_rate_limit(message: &str) -> bool {
    let lower = message.to_ascii_lowercase();
    lower.contains("resource_exhausted")
        || lower.contains("quota")
        || lower.contains("rate limit")
        || lower.contains("429")
}

pub type Result<T> = std::result::Result<T, LLMError>;

/// Multimodal request for a schema-constrained JSON answer.
#[derive(Debug, Clone)]
pub struct StructuredRequest {
    pub image: ImagePayload,
    pub prompt: String,
    pub generation_config: GenerationConfig,
    pub response_schema: Value,
}

/// Base64 image data returned inline by the image model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    pub data: String,
}

impl InlineImage {
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

#[async_trait]
pub trait GenerativeProvider: Send + Sync {
    /// Fails with [`LLMError::MissingCredential`] when no call can be authenticated.
    fn ensure_credential(&self) -> Result<()> {
        Ok(())
    }

    /// Returns the raw JSON text produced under `request.response_schema`.
    async fn generate_structured(&self, request: &StructuredRequest) -> Result<String>;

    /// Returns `Ok(None)` when the model answered without inline image data.
    async fn generate_image(&self, prompt: &str) -> Result<Option<InlineImage>>;
}
