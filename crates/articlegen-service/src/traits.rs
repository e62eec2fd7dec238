use async_trait::async_trait;
use articlegen_core::PromptRequest;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompletionError {
    #[error("connection failed: {0}")]
    Network(String),

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("rate limited: {0}")]
    RateLimited(String),

    #[error("completion service returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Sampling settings sent with every completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelParams {
    pub model: String,
    pub temperature: f32,
}

impl ModelParams {
    pub const DEFAULT_MODEL: &'static str = "gpt-3.5-turbo";
    pub const DEFAULT_TEMPERATURE: f32 = 0.7;
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            model: Self::DEFAULT_MODEL.to_string(),
            temperature: Self::DEFAULT_TEMPERATURE,
        }
    }
}

/// A hosted text-completion service.
///
/// The pipeline programs against this trait.
/// `OpenAiClient` talks to an OpenAI-compatible chat endpoint.
/// `MockCompletionClient` replays scripted results for tests.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send one prompt and return the generated text.
    async fn complete(
        &self,
        prompt: &PromptRequest,
        params: &ModelParams,
    ) -> Result<String, CompletionError>;
}
