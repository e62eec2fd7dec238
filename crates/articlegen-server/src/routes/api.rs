use articlegen_core::{ArticleError, Keyword};
use articlegen_service::CompletionError;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::{completion_status, AppState, RawOptions};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/generate", post(generate))
        .route("/api/generate/basic", post(generate_basic))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[derive(Debug, Deserialize)]
struct GenerateRequest {
    #[serde(default)]
    keyword: String,
    template: Option<String>,
    format: Option<String>,
    #[serde(default)]
    title: bool,
    #[serde(default)]
    cta: bool,
    #[serde(default)]
    hashtags: bool,
    #[serde(default)]
    writing_guide: bool,
    #[serde(default)]
    seo: bool,
}

#[derive(Debug, Deserialize)]
struct BasicRequest {
    #[serde(default)]
    keyword: String,
}

async fn generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let keyword = Keyword::parse(&req.keyword).map_err(input_error)?;
    let options = RawOptions {
        template: req.template.as_deref(),
        format: req.format.as_deref(),
        title: req.title,
        cta: req.cta,
        hashtags: req.hashtags,
        writing_guide: req.writing_guide,
        seo: req.seo,
    }
    .resolve()
    .map_err(input_error)?;

    state
        .pipeline
        .run(&keyword, &options)
        .await
        .map(|out| Json(json!(out)))
        .map_err(to_error)
}

async fn generate_basic(
    State(state): State<AppState>,
    Json(req): Json<BasicRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let keyword = Keyword::parse(&req.keyword).map_err(input_error)?;
    state
        .pipeline
        .run_basic(&keyword)
        .await
        .map(|out| Json(json!(out)))
        .map_err(to_error)
}

fn input_error(e: ArticleError) -> (StatusCode, Json<Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() })))
}

fn to_error(e: CompletionError) -> (StatusCode, Json<Value>) {
    (completion_status(&e), Json(json!({ "error": e.to_string() })))
}
