pub mod config;
mod html;
mod routes;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

use std::sync::Arc;

use anyhow::Result;
use articlegen_service::{OpenAiClient, Pipeline};
use tokio::net::TcpListener;

use config::{ConfigError, ServerConfig};

/// Build the process-wide pipeline from configuration.
/// Fails if the completion credential is missing.
pub fn build_pipeline(config: &ServerConfig) -> Result<Pipeline, ConfigError> {
    let client = OpenAiClient::new(config.api_key()?).with_base_url(&config.base_url);
    Ok(Pipeline::new(Arc::new(client), config.model_params()))
}

pub async fn serve(listener: TcpListener, pipeline: Pipeline) -> Result<()> {
    let app = routes::build_router(pipeline);
    axum::serve(listener, app).await?;
    Ok(())
}
