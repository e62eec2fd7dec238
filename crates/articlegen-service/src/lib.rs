pub mod mock;
mod openai;
mod pipeline;
mod traits;

pub use openai::OpenAiClient;
pub use pipeline::Pipeline;
pub use traits::{CompletionClient, CompletionError, ModelParams};
