pub mod error;
pub mod parse;
pub mod pipeline;
pub mod progress;
pub mod prompt;
pub mod throttle;

pub use error::{GenerationCause, HydrationFailure, HydrationFailureKind, PipelineError};
pub use parse::{parse_craft_idea, SchemaViolation};
pub use pipeline::{IdeaPipeline, IdeaRequest};
pub use progress::{NoProgress, ProgressEvent, ProgressSink};
pub use throttle::ThrottlePolicy;
