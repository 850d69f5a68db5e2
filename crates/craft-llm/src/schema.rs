//! Response schema sent with the structured text call.

use serde_json::{json, Value};

/// Object with required `title`, `materials` and `steps[{text, imagePrompt}]`.
pub fn craft_idea_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": {
                "type": "STRING",
                "description": "A creative name for the toy/craft."
            },
            "materials": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "A list of materials from the image and any other common items needed."
            },
            "steps": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "text": {
                            "type": "STRING",
                            "description": "The instruction for this step."
                        },
                        "imagePrompt": {
                            "type": "STRING",
                            "description": "A simple, concise prompt for an image generation model to create a cartoon-style illustration for this step. E.g., 'A child gluing a bottle cap onto a cardboard tube'."
                        }
                    },
                    "required": ["text", "imagePrompt"]
                },
                "description": "The step-by-step instructions."
            }
        },
        "required": ["title", "materials", "steps"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_requires_all_three_fields() {
        let schema = craft_idea_schema();
        assert_eq!(schema["required"], json!(["title", "materials", "steps"]));
        assert_eq!(schema["properties"].as_object().unwrap().len(), 3);
        assert_eq!(
            schema["properties"]["steps"]["items"]["required"],
            json!(["text", "imagePrompt"])
        );
    }
}
