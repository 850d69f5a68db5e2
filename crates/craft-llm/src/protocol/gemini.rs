//! Google Gemini `generateContent` request/response types.
//!
//! # Example Gemini Request
//! ```json
//! {
//!   "contents": [
//!     {
//!       "role": "user",
//!       "parts": [
//!         {"inlineData": {"mimeType": "image/png", "data": "iVBORw0..."}},
//!         {"text": "Look at the image of items..."}
//!       ]
//!     }
//!   ],
//!   "generationConfig": {
//!     "responseMimeType": "application/json",
//!     "responseSchema": {...},
//!     "temperature": 0.8, "topK": 40, "topP": 0.95
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use craft_core::GenerationConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfigBody>,
}

impl GenerateContentRequest {
    /// Image + prompt request constrained to a JSON schema.
    pub fn structured(
        image: InlineData,
        prompt: impl Into<String>,
        sampling: &GenerationConfig,
        schema: Value,
    ) -> Self {
        Self {
            contents: vec![Content::user(vec![Part::inline(image), Part::text(prompt)])],
            generation_config: Some(GenerationConfigBody {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(schema),
                temperature: Some(sampling.temperature),
                top_k: Some(sampling.top_k),
                top_p: Some(sampling.top_p),
                ..Default::default()
            }),
        }
    }

    /// Text prompt asking for an image-only answer.
    pub fn image(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content::user(vec![Part::text(prompt)])],
            generation_config: Some(GenerationConfigBody {
                response_modalities: Some(vec!["IMAGE".to_string()]),
                ..Default::default()
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(parts: Vec<Part>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn inline(data: InlineData) -> Self {
        Self {
            inline_data: Some(data),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    /// Base64 encoded bytes.
    pub data: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfigBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_modalities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

impl GenerateContentResponse {
    fn first_parts(&self) -> &[Part] {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| content.parts.as_slice())
            .unwrap_or(&[])
    }

    /// Concatenated text parts of the first candidate, if any.
    pub fn text(&self) -> Option<String> {
        let texts: Vec<&str> = self
            .first_parts()
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.concat())
        }
    }

    /// First part of the first candidate carrying inline data.
    pub fn inline_image(&self) -> Option<&InlineData> {
        self.first_parts()
            .iter()
            .find_map(|part| part.inline_data.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn structured_request_uses_camel_case_wire_names() {
        let request = GenerateContentRequest::structured(
            InlineData {
                mime_type: "image/jpeg".to_string(),
                data: "AAAA".to_string(),
            },
            "make a toy",
            &GenerationConfig::default(),
            json!({"type": "OBJECT"}),
        );
        let value = serde_json::to_value(&request).unwrap();

        let parts = &value["contents"][0]["parts"];
        assert_eq!(parts[0]["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(parts[1]["text"], "make a toy");
        let config = &value["generationConfig"];
        assert_eq!(config["responseMimeType"], "application/json");
        assert_eq!(config["responseSchema"]["type"], "OBJECT");
        assert_eq!(config["topK"], 40);
        assert!(config.get("responseModalities").is_none());
    }

    #[test]
    fn image_request_asks_for_image_modality() {
        let value = serde_json::to_value(GenerateContentRequest::image("a cat")).unwrap();
        assert_eq!(value["generationConfig"]["responseModalities"], json!(["IMAGE"]));
        assert_eq!(value["contents"][0]["parts"][0]["text"], "a cat");
    }

    #[test]
    fn response_text_concatenates_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "{\"a\":"}, {"text": "1}"}]},
                "finishReason": "STOP"
            }]
        }))
        .unwrap();
        assert_eq!(response.text().as_deref(), Some("{\"a\":1}"));
        assert!(response.inline_image().is_none());
    }

    #[test]
    fn inline_image_skips_leading_text_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {"parts": [
                    {"text": "Here is your drawing"},
                    {"inlineData": {"mimeType": "image/png", "data": "iVBOR"}}
                ]}
            }]
        }))
        .unwrap();
        let image = response.inline_image().unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, "iVBOR");
    }

    #[test]
    fn empty_response_has_nothing() {
        let response: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.text().is_none());
        assert!(response.inline_image().is_none());
    }
}
