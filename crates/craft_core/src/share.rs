//! Plain-text rendering of an idea for the share action.

use crate::models::CraftIdea;

pub fn share_title(idea: &CraftIdea) -> String {
    format!("Junk Art Genius: {}", idea.title)
}

pub fn share_text(idea: &CraftIdea) -> String {
    let materials = idea
        .materials
        .iter()
        .map(|m| format!("- {m}"))
        .collect::<Vec<_>>()
        .join("\n");
    let steps = idea
        .steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step.text))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Check out this craft idea: {}\n\nMaterials Needed:\n{}\n\nInstructions:\n{}",
        idea.title, materials, steps
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CraftStep;

    #[test]
    fn share_text_lists_materials_and_numbered_steps() {
        let idea = CraftIdea {
            title: "Paper Crown".to_string(),
            materials: vec!["Paper".to_string(), "Tape".to_string()],
            steps: vec![
                CraftStep::new("Cut a zigzag.", "zigzag"),
                CraftStep::new("Tape the ends.", "tape"),
            ],
        };

        assert_eq!(
            share_text(&idea),
            "Check out this craft idea: Paper Crown\n\n\
             Materials Needed:\n- Paper\n- Tape\n\n\
             Instructions:\n1. Cut a zigzag.\n2. Tape the ends."
        );
        assert_eq!(share_title(&idea), "Junk Art Genius: Paper Crown");
    }

    #[test]
    fn share_text_handles_empty_idea() {
        let idea = CraftIdea {
            title: "Blank".to_string(),
            materials: Vec::new(),
            steps: Vec::new(),
        };
        assert!(share_text(&idea).ends_with("Instructions:\n"));
    }
}
