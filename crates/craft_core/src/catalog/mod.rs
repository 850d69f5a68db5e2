//! Built-in content shipped with the application.

mod inspiration;
mod materials;

pub use inspiration::inspiration_ideas;
pub use materials::{common_materials, Material, MaterialCategory};

/// Supply tags the user can pick as extra constraints for generation.
pub const AVAILABLE_SUPPLIES: &[&str] = &[
    "construction paper",
    "cotton balls",
    "crayons",
    "glitter",
    "glue",
    "googly eyes",
    "markers",
    "paint",
    "pipe cleaners",
    "ribbons",
    "scissors",
    "stickers",
    "string",
    "tape",
];

/// Case-insensitive match of a user-typed tag against [`AVAILABLE_SUPPLIES`].
pub fn find_supply(tag: &str) -> Option<&'static str> {
    let needle = tag.trim();
    AVAILABLE_SUPPLIES
        .iter()
        .copied()
        .find(|supply| supply.eq_ignore_ascii_case(needle))
}
