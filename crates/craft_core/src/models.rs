use std::ops::RangeInclusive;
use std::path::Path;

use image::ImageFormat;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single instruction of a craft project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CraftStep {
    pub text: String,
    /// Input for the illustration model, never shown to the user.
    pub image_prompt: String,
    /// `data:` URI of the hydrated illustration, absent until hydration succeeds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl CraftStep {
    pub fn new(text: impl Into<String>, image_prompt: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image_prompt: image_prompt.into(),
            image_url: None,
        }
    }

    pub fn has_image(&self) -> bool {
        self.image_url.is_some()
    }
}

/// A generated craft project. `title` is the identity key for save/delete/share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CraftIdea {
    pub title: String,
    pub materials: Vec<String>,
    pub steps: Vec<CraftStep>,
}

impl CraftIdea {
    /// Copy of the idea with every illustration stripped, used for persistence.
    pub fn to_lean(&self) -> CraftIdea {
        CraftIdea {
            title: self.title.clone(),
            materials: self.materials.clone(),
            steps: self
                .steps
                .iter()
                .map(|step| CraftStep::new(step.text.clone(), step.image_prompt.clone()))
                .collect(),
        }
    }

    pub fn is_lean(&self) -> bool {
        self.steps.iter().all(|step| step.image_url.is_none())
    }

    pub fn hydrated_step_count(&self) -> usize {
        self.steps.iter().filter(|step| step.has_image()).count()
    }

    pub fn same_entity(&self, other: &CraftIdea) -> bool {
        self.title == other.title
    }
}

pub const TEMPERATURE_RANGE: RangeInclusive<f32> = 0.0..=1.0;
pub const TOP_K_RANGE: RangeInclusive<u32> = 1..=100;
pub const TOP_P_RANGE: RangeInclusive<f32> = 0.0..=1.0;

/// Sampling parameters forwarded verbatim to the text model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.8,
            top_k: 40,
            top_p: 0.95,
        }
    }
}

#[derive(Debug, Error)]
pub enum ImagePayloadError {
    #[error("Failed to read image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image is empty")]
    Empty,

    #[error("Unsupported image format, expected PNG, JPEG, GIF or WebP")]
    UnsupportedFormat,
}

/// Raw image bytes plus their MIME type, as uploaded by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl ImagePayload {
    pub fn new(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data,
        }
    }

    /// Build a payload from raw bytes, sniffing the MIME type from the content.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, ImagePayloadError> {
        if data.is_empty() {
            return Err(ImagePayloadError::Empty);
        }
        let format = image::guess_format(&data).map_err(|_| ImagePayloadError::UnsupportedFormat)?;
        let mime_type = match format {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Gif => "image/gif",
            ImageFormat::WebP => "image/webp",
            _ => return Err(ImagePayloadError::UnsupportedFormat),
        };
        Ok(Self::new(mime_type, data))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ImagePayloadError> {
        let data = std::fs::read(path.as_ref())?;
        Self::from_bytes(data)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

    fn hydrated_idea() -> CraftIdea {
        CraftIdea {
            title: "Sock Puppet".to_string(),
            materials: vec!["Old sock".to_string(), "Googly eyes".to_string()],
            steps: vec![
                CraftStep {
                    text: "Put the sock on your hand.".to_string(),
                    image_prompt: "A child wearing a sock on their hand".to_string(),
                    image_url: Some("data:image/png;base64,AAAA".to_string()),
                },
                CraftStep::new("Glue the eyes.", "Googly eyes on a sock"),
            ],
        }
    }

    #[test]
    fn to_lean_strips_images_and_keeps_prompts() {
        let idea = hydrated_idea();
        let lean = idea.to_lean();

        assert!(lean.is_lean());
        assert_eq!(lean.steps.len(), idea.steps.len());
        assert_eq!(lean.steps[0].image_prompt, idea.steps[0].image_prompt);
        assert_eq!(lean.title, idea.title);
        assert_eq!(idea.hydrated_step_count(), 1);
    }

    #[test]
    fn lean_serialization_omits_image_url() {
        let json = serde_json::to_string(&hydrated_idea().to_lean()).unwrap();
        assert!(json.contains("\"imagePrompt\""));
        assert!(!json.contains("imageUrl"));
    }

    #[test]
    fn step_deserializes_without_image_url() {
        let step: CraftStep =
            serde_json::from_str(r#"{"text":"Cut","imagePrompt":"Scissors"}"#).unwrap();
        assert_eq!(step, CraftStep::new("Cut", "Scissors"));
    }

    #[test]
    fn generation_config_uses_provider_field_names() {
        let value = serde_json::to_value(GenerationConfig::default()).unwrap();
        assert_eq!(value["topK"], 40);
        assert!(value.get("topP").is_some());
        assert!(value.get("temperature").is_some());
    }

    #[test]
    fn image_payload_sniffs_png() {
        let payload = ImagePayload::from_bytes(PNG_SIGNATURE.to_vec()).unwrap();
        assert_eq!(payload.mime_type, "image/png");
    }

    #[test]
    fn image_payload_rejects_empty_and_unknown() {
        assert!(matches!(
            ImagePayload::from_bytes(Vec::new()),
            Err(ImagePayloadError::Empty)
        ));
        assert!(matches!(
            ImagePayload::from_bytes(b"not an image".to_vec()),
            Err(ImagePayloadError::UnsupportedFormat)
        ));
    }
}
