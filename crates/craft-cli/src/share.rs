use arboard::Clipboard;
use colored::Colorize;
use craft_core::{share_text, share_title, CraftIdea};

use crate::render;

/// Copy the idea's share text to the clipboard, printing it when that fails.
pub fn share_idea(idea: &CraftIdea) {
    let text = share_text(idea);
    let copied = Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.clone()));

    match copied {
        Ok(()) => render::success("Craft idea copied to clipboard!"),
        Err(e) => {
            log::warn!("Clipboard unavailable: {}", e);
            render::failure(&format!("Failed to copy to clipboard: {e}"));
            println!();
            println!("{}", share_title(idea).bold());
            println!();
            println!("{text}");
        }
    }
}
