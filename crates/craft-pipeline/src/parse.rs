//! Validation of the structured text response.

use serde::Deserialize;
use thiserror::Error;

use craft_core::{CraftIdea, CraftStep};

#[derive(Debug, Error)]
pub enum SchemaViolation {
    #[error("response is not a valid craft idea: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("response has an empty title")]
    EmptyTitle,

    #[error("response has no steps")]
    NoSteps,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStep {
    text: String,
    image_prompt: String,
}

#[derive(Deserialize)]
struct RawIdea {
    title: String,
    materials: Vec<String>,
    steps: Vec<RawStep>,
}

/// Strip a Markdown code fence some models wrap around JSON output.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Parse the provider's JSON into a lean [`CraftIdea`] with at least one step.
pub fn parse_craft_idea(text: &str) -> Result<CraftIdea, SchemaViolation> {
    let raw: RawIdea = serde_json::from_str(strip_code_fence(text))?;

    let title = raw.title.trim().to_string();
    if title.is_empty() {
        return Err(SchemaViolation::EmptyTitle);
    }
    if raw.steps.is_empty() {
        return Err(SchemaViolation::NoSteps);
    }

    Ok(CraftIdea {
        title,
        materials: raw.materials,
        steps: raw
            .steps
            .into_iter()
            .map(|step| CraftStep::new(step.text, step.image_prompt))
            .collect(),
    })
}
