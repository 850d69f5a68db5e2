//! Prompt composition for the two provider calls.

const GUIDANCE: &str = "Keep instructions simple, clear, and safe for a child with adult supervision. \
Ensure image prompts are descriptive and kid-friendly.";

const ILLUSTRATION_STYLE: &str = "A simple, colorful, cartoon-style, kid-friendly drawing of:";

/// Build the instruction for the structured text call.
///
/// A non-blank `custom_idea` asks the model to build around that idea,
/// otherwise a generic project for a young child is requested. Non-empty
/// supplies are always appended as a constraint.
pub fn compose_prompt(custom_idea: &str, available_supplies: &[String]) -> String {
    let custom_idea = custom_idea.trim();
    let mut prompt = if custom_idea.is_empty() {
        "You are a creative assistant for parents. Look at the image of items and generate a \
         creative craft project for a kindergarten-aged child. Your response must be a JSON \
         object that strictly follows the provided schema."
            .to_string()
    } else {
        format!(
            "You are a creative assistant for parents. Look at the image of items and generate a \
             craft project based on the user's idea: \"{custom_idea}\". Your response must be a \
             JSON object that strictly follows the provided schema. Use the items from the image \
             as the primary materials."
        )
    };

    prompt.push('\n');
    if let Some(line) = supplies_line(available_supplies) {
        prompt.push_str(&line);
        prompt.push('\n');
    }
    prompt.push_str(GUIDANCE);
    prompt
}

fn supplies_line(available_supplies: &[String]) -> Option<String> {
    let supplies: Vec<&str> = available_supplies
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    if supplies.is_empty() {
        return None;
    }
    Some(format!(
        "Incorporate these available supplies: {}.",
        supplies.join(", ")
    ))
}

/// Wrap a step's image prompt in the fixed illustration style.
pub fn illustration_prompt(image_prompt: &str) -> String {
    format!("{ILLUSTRATION_STYLE} {}", image_prompt.trim())
}
