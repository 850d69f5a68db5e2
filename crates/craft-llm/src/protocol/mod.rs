//! Wire formats of the hosted generative API.

pub mod gemini;

pub use gemini::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfigBody,
    InlineData, Part,
};
