use anyhow::Result;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use articlegen_server::config::ServerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::parse();
    let pipeline = articlegen_server::build_pipeline(&config)?;
    info!(
        "model: {} (temperature {})",
        pipeline.params().model,
        pipeline.params().temperature
    );

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!("articlegen-server listening on http://{addr}");

    articlegen_server::serve(listener, pipeline).await
}
