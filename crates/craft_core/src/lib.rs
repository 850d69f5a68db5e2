//! craft_core - Core types shared by the craft idea crates
//!
//! This crate provides the foundational types used across the workspace:
//! - `models` - CraftIdea, CraftStep, GenerationConfig, ImagePayload
//! - `catalog` - built-in supplies, inspiration projects and the materials guide
//! - `share` - plain-text rendering used when sharing an idea
//! - `config` / `paths` - layered configuration and on-disk locations

pub mod catalog;
pub mod config;
pub mod models;
pub mod paths;
pub mod share;

// Re-export commonly used types
pub use catalog::{
    common_materials, find_supply, inspiration_ideas, Material, MaterialCategory, AVAILABLE_SUPPLIES,
};
pub use config::Config;
pub use models::{CraftIdea, CraftStep, GenerationConfig, ImagePayload, ImagePayloadError};
pub use share::{share_text, share_title};
