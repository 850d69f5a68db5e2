use craft_llm::LLMError;
use thiserror::Error;

use crate::parse::SchemaViolation;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// No credential is configured; raised before any network call.
    #[error("{0}")]
    Configuration(String),

    #[error("The uploaded image is empty. Please choose a photo to analyze.")]
    InvalidImage,

    #[error("Failed to get a creative idea from the AI. The text generation part failed.")]
    Generation(#[source] GenerationCause),

    #[error(transparent)]
    Hydration(#[from] HydrationFailure),
}

#[derive(Debug, Error)]
pub enum GenerationCause {
    #[error(transparent)]
    Provider(LLMError),

    #[error(transparent)]
    Schema(#[from] SchemaViolation),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HydrationFailureKind {
    RateLimited,
    Other,
}

/// Hard failure during the image batch. Remaining steps were not attempted.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HydrationFailure {
    pub kind: HydrationFailureKind,
    /// Index of the step whose call failed.
    pub step_index: usize,
    message: String,
    source: LLMError,
}

impl HydrationFailure {
    pub fn new(step_index: usize, source: LLMError) -> Self {
        let (kind, message) = if source.is_rate_limited() {
            (
                HydrationFailureKind::RateLimited,
                "Image generation is temporarily unavailable because the request limit was \
                 reached. Please wait a minute and try again."
                    .to_string(),
            )
        } else {
            (
                HydrationFailureKind::Other,
                format!(
                    "Failed to generate images. This could be due to a missing or invalid API \
                     key or a network issue. Details: {source}"
                ),
            )
        };
        Self {
            kind,
            step_index,
            message,
            source,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl PipelineError {
    pub(crate) fn provider_generation(err: LLMError) -> Self {
        PipelineError::Generation(GenerationCause::Provider(err))
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(
            self,
            PipelineError::Hydration(HydrationFailure {
                kind: HydrationFailureKind::RateLimited,
                ..
            })
        )
    }
}
