use std::sync::Arc;

use articlegen_core::{
    format, FormattedOutput, GenerationOptions, Keyword, OutputFormat, PromptRequest,
};
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::{CompletionClient, CompletionError, ModelParams};

/// One submission's worth of work: assemble, complete sequentially,
/// concatenate, format.
///
/// Holds the single completion client for the life of the process.
/// Runs share nothing else.
#[derive(Clone)]
pub struct Pipeline {
    client: Arc<dyn CompletionClient>,
    params: ModelParams,
}

impl Pipeline {
    pub fn new(client: Arc<dyn CompletionClient>, params: ModelParams) -> Self {
        Self { client, params }
    }

    pub fn params(&self) -> &ModelParams {
        &self.params
    }

    /// Run the extended flow.
    ///
    /// Any failed call aborts the run; results already received are
    /// discarded.
    pub async fn run(
        &self,
        keyword: &Keyword,
        options: &GenerationOptions,
    ) -> Result<FormattedOutput, CompletionError> {
        let run_id = Uuid::new_v4();
        let prompts = articlegen_prompts::assemble(keyword, options);
        let span = info_span!(
            "generate",
            %run_id,
            template = %options.template,
            format = %options.format
        );
        async move {
            info!(prompts = prompts.len(), "starting run");
            let aggregate = self.complete_all(&prompts).await?;
            // Extended Markdown is returned as the model wrote it; only the
            // basic flow shifts headings.
            let output = match options.format {
                OutputFormat::Markdown => FormattedOutput {
                    format: OutputFormat::Markdown,
                    text: aggregate,
                },
                mode => format(&aggregate, mode),
            };
            info!(chars = output.text.chars().count(), "run complete");
            Ok(output)
        }
        .instrument(span)
        .await
    }

    /// Run the basic flow: a single outline prompt, always rendered as
    /// heading-shifted Markdown.
    pub async fn run_basic(&self, keyword: &Keyword) -> Result<FormattedOutput, CompletionError> {
        let run_id = Uuid::new_v4();
        let prompt = articlegen_prompts::assemble_basic(keyword);
        async move {
            info!("starting basic run");
            let raw = self.complete_one(&prompt).await?;
            Ok(format(&raw, OutputFormat::Markdown))
        }
        .instrument(info_span!("generate_basic", %run_id))
        .await
    }

    async fn complete_all(&self, prompts: &[PromptRequest]) -> Result<String, CompletionError> {
        let mut aggregate = String::new();
        for prompt in prompts {
            let result = self.complete_one(prompt).await?;
            match prompt.capability.section_heading() {
                Some(heading) => {
                    aggregate.push_str("\n\n## ");
                    aggregate.push_str(heading);
                    aggregate.push('\n');
                    aggregate.push_str(&result);
                }
                None => aggregate.push_str(&result),
            }
        }
        Ok(aggregate)
    }

    async fn complete_one(&self, prompt: &PromptRequest) -> Result<String, CompletionError> {
        debug!(capability = %prompt.capability, "requesting completion");
        match self.client.complete(prompt, &self.params).await {
            Ok(text) => Ok(text),
            Err(e) => {
                warn!(capability = %prompt.capability, "completion failed: {e}");
                Err(e)
            }
        }
    }
}
