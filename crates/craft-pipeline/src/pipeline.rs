use std::sync::Arc;

use craft_core::{CraftIdea, GenerationConfig, ImagePayload};
use craft_llm::{craft_idea_schema, GenerativeProvider, StructuredRequest};

use crate::error::{GenerationCause, HydrationFailure, PipelineError};
use crate::parse::parse_craft_idea;
use crate::progress::ProgressSink;
use crate::prompt::{compose_prompt, illustration_prompt};
use crate::throttle::ThrottlePolicy;

pub type Result<T> = std::result::Result<T, PipelineError>;

pub const STATUS_ANALYZING: &str = "Analyzing image and generating instructions...";

/// User input for a single generation.
#[derive(Debug, Clone)]
pub struct IdeaRequest {
    pub image: ImagePayload,
    pub available_supplies: Vec<String>,
    /// Blank means "no custom idea".
    pub custom_idea: String,
    pub generation_config: GenerationConfig,
}

impl IdeaRequest {
    pub fn new(image: ImagePayload) -> Self {
        Self {
            image,
            available_supplies: Vec::new(),
            custom_idea: String::new(),
            generation_config: GenerationConfig::default(),
        }
    }
}

/// Two-phase generation: structured text first, then one illustration per
/// step in strict index order.
pub struct IdeaPipeline {
    provider: Arc<dyn GenerativeProvider>,
    throttle: ThrottlePolicy,
}

impl IdeaPipeline {
    pub fn new(provider: Arc<dyn GenerativeProvider>) -> Self {
        Self {
            provider,
            throttle: ThrottlePolicy::default(),
        }
    }

    pub fn with_throttle(mut self, throttle: ThrottlePolicy) -> Self {
        self.throttle = throttle;
        self
    }

    pub fn throttle(&self) -> ThrottlePolicy {
        self.throttle
    }

    fn check_credential(&self) -> Result<()> {
        self.provider
            .ensure_credential()
            .map_err(|err| PipelineError::Configuration(err.to_string()))
    }

    /// Generate a craft idea from a photo and hydrate its steps with images.
    ///
    /// Fails with [`PipelineError::Generation`] if the text call errors or its
    /// payload does not match the idea schema; the call is not retried.
    pub async fn generate_idea<S>(&self, request: IdeaRequest, progress: &mut S) -> Result<CraftIdea>
    where
        S: ProgressSink + ?Sized,
    {
        self.check_credential()?;
        if request.image.is_empty() {
            return Err(PipelineError::InvalidImage);
        }

        progress.status(STATUS_ANALYZING);

        let structured = StructuredRequest {
            prompt: compose_prompt(&request.custom_idea, &request.available_supplies),
            image: request.image,
            generation_config: request.generation_config,
            response_schema: craft_idea_schema(),
        };
        log::debug!("Idea prompt: {}", structured.prompt);

        let text = self
            .provider
            .generate_structured(&structured)
            .await
            .map_err(|err| {
                log::error!("Structured text generation failed: {}", err);
                PipelineError::provider_generation(err)
            })?;

        let idea = parse_craft_idea(&text).map_err(|violation| {
            log::error!("Structured response rejected: {}", violation);
            PipelineError::Generation(GenerationCause::Schema(violation))
        })?;
        log::info!(
            "Generated idea '{}' with {} steps",
            idea.title,
            idea.steps.len()
        );

        progress.status(&format!("Generating images for {} steps...", idea.steps.len()));
        self.hydrate_images(idea, progress).await
    }

    /// Add an illustration to every step, one call at a time.
    ///
    /// A step without inline image data keeps `image_url` unset and the batch
    /// continues. A provider error aborts the remaining steps.
    pub async fn hydrate_images<S>(&self, mut idea: CraftIdea, progress: &mut S) -> Result<CraftIdea>
    where
        S: ProgressSink + ?Sized,
    {
        self.check_credential()?;

        for index in 0..idea.steps.len() {
            if index > 0 {
                self.throttle.pause().await;
            }

            let prompt = illustration_prompt(&idea.steps[index].image_prompt);
            match self.provider.generate_image(&prompt).await {
                Ok(Some(image)) => {
                    idea.steps[index].image_url = Some(image.to_data_uri());
                }
                Ok(None) => {
                    log::warn!("No image for step {} of '{}'", index + 1, idea.title);
                }
                Err(err) => {
                    log::error!(
                        "Image generation aborted at step {} of '{}': {}",
                        index + 1,
                        idea.title,
                        err
                    );
                    return Err(HydrationFailure::new(index, err).into());
                }
            }

            progress.step_hydrated(index, &idea.steps[index]);
        }

        log::info!(
            "Hydrated {}/{} steps of '{}'",
            idea.hydrated_step_count(),
            idea.steps.len(),
            idea.title
        );
        Ok(idea)
    }
}
