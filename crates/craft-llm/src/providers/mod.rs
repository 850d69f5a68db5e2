//! Generative providers
//!
//! This module contains the hosted provider implementations.

pub mod gemini;

pub use gemini::GeminiProvider;
