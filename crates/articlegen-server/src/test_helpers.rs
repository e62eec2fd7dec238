use std::sync::Arc;

use articlegen_service::{CompletionClient, ModelParams, Pipeline};
use axum::Router;
use tokio::net::TcpListener;

/// Build a router around `client` with default model parameters.
pub fn test_router(client: Arc<dyn CompletionClient>) -> Router {
    crate::routes::build_router(Pipeline::new(client, ModelParams::default()))
}

/// A running test server with base_url and background task handle.
pub struct TestServer {
    pub base_url: String,
    _handle: tokio::task::JoinHandle<()>,
}

/// Spawn an axum test server on a random port. Returns the TestServer
/// with the `base_url` (e.g. "http://127.0.0.1:12345").
pub async fn spawn_test_server(pipeline: Pipeline) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{addr}");
    let handle = tokio::spawn(async move {
        crate::serve(listener, pipeline).await.unwrap();
    });
    TestServer {
        base_url,
        _handle: handle,
    }
}
