use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use articlegen_core::PromptRequest;

use crate::{CompletionClient, CompletionError, ModelParams};

/// A scripted completion client for tests.
///
/// Replies are handed out in order, one per call. Once the script runs out
/// every further call gets the fallback reply. Every prompt received is
/// recorded.
pub struct MockCompletionClient {
    script: Mutex<VecDeque<Result<String, CompletionError>>>,
    fallback: Result<String, CompletionError>,
    received: Mutex<Vec<PromptRequest>>,
}

impl MockCompletionClient {
    /// Reply with the same text to every prompt.
    pub fn always(text: &str) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: Ok(text.to_string()),
            received: Mutex::new(Vec::new()),
        }
    }

    /// Fail every call with `err`.
    pub fn failing(err: CompletionError) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: Err(err),
            received: Mutex::new(Vec::new()),
        }
    }

    /// Replay `replies` in order, then fall back to an empty success.
    pub fn scripted(replies: Vec<Result<String, CompletionError>>) -> Self {
        Self {
            script: Mutex::new(replies.into()),
            fallback: Ok(String::new()),
            received: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, in call order.
    pub fn received(&self) -> Vec<PromptRequest> {
        self.received
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(
        &self,
        prompt: &PromptRequest,
        _params: &ModelParams,
    ) -> Result<String, CompletionError> {
        if let Ok(mut received) = self.received.lock() {
            received.push(prompt.clone());
        }
        let next = self.script.lock().ok().and_then(|mut s| s.pop_front());
        next.unwrap_or_else(|| self.fallback.clone())
    }
}
