use async_trait::async_trait;
use articlegen_core::PromptRequest;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::{CompletionClient, CompletionError, ModelParams};

/// Chat-completion client for the OpenAI API or any compatible endpoint.
///
/// Built once at start-up and shared; `reqwest::Client` pools connections
/// internally.
pub struct OpenAiClient {
    base_url: String,
    client: Client,
    api_key: String,
}

impl OpenAiClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openai.com/v1";

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(
        &self,
        prompt: &PromptRequest,
        params: &ModelParams,
    ) -> Result<String, CompletionError> {
        let body = ChatRequest {
            model: &params.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt.text,
            }],
            temperature: params.temperature,
        };

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| CompletionError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(parse_error_with_status(status, resp).await);
        }

        let parsed: ChatResponse = resp
            .json()
            .await
            .map_err(|e| CompletionError::MalformedResponse(format!("json decode: {e}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| CompletionError::MalformedResponse("no message content".into()))
    }
}

async fn parse_error_with_status(status: StatusCode, resp: reqwest::Response) -> CompletionError {
    let body = resp.text().await.unwrap_or_default();
    let msg = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| {
            v["error"]["message"]
                .as_str()
                .or_else(|| v["error"].as_str())
                .map(String::from)
        })
        .unwrap_or(body);

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => CompletionError::Auth(msg),
        StatusCode::TOO_MANY_REQUESTS => CompletionError::RateLimited(msg),
        _ => CompletionError::Api {
            status: status.as_u16(),
            message: msg,
        },
    }
}
