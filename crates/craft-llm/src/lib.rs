pub mod protocol;
pub mod provider;
pub mod providers;
pub mod schema;

pub use provider::{GenerativeProvider, InlineImage, LLMError, Result, StructuredRequest};
pub use providers::GeminiProvider;
pub use schema::craft_idea_schema;
