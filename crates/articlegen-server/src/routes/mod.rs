pub mod api;
pub mod pages;

use std::sync::Arc;

use articlegen_core::{ArticleError, GenerationOptions, OutputFormat, TemplateStyle};
use articlegen_service::{CompletionError, Pipeline};
use axum::{http::StatusCode, Router};
use tower_http::trace::TraceLayer;

pub struct InnerAppState {
    pub pipeline: Pipeline,
}

pub type AppState = Arc<InnerAppState>;

pub fn build_router(pipeline: Pipeline) -> Router {
    let state = Arc::new(InnerAppState { pipeline });

    Router::new()
        .merge(api::routes())
        .merge(pages::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Raw option values as they arrive from a form or JSON body.
#[derive(Debug, Default)]
pub struct RawOptions<'a> {
    pub template: Option<&'a str>,
    pub format: Option<&'a str>,
    pub title: bool,
    pub cta: bool,
    pub hashtags: bool,
    pub writing_guide: bool,
    pub seo: bool,
}

impl RawOptions<'_> {
    /// Resolve selector names; a missing selector takes its default.
    pub fn resolve(&self) -> Result<GenerationOptions, ArticleError> {
        let template = match self.template {
            None => TemplateStyle::default(),
            Some(name) => TemplateStyle::parse_str(name)
                .ok_or_else(|| ArticleError::InvalidInput(format!("unknown template: {name}")))?,
        };
        let format = match self.format {
            None => OutputFormat::default(),
            Some(name) => OutputFormat::parse_str(name)
                .ok_or_else(|| ArticleError::InvalidInput(format!("unknown format: {name}")))?,
        };
        Ok(GenerationOptions {
            template,
            title: self.title,
            cta: self.cta,
            hashtags: self.hashtags,
            writing_guide: self.writing_guide,
            seo: self.seo,
            format,
        })
    }
}

/// Upstream failures are reported as a bad gateway, except quota
/// exhaustion which is passed through.
pub fn completion_status(e: &CompletionError) -> StatusCode {
    match e {
        CompletionError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
        CompletionError::Network(_)
        | CompletionError::Auth(_)
        | CompletionError::Api { .. }
        | CompletionError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_defaults() {
        let opts = RawOptions::default().resolve().unwrap();
        assert_eq!(opts, GenerationOptions::default());
    }

    #[test]
    fn resolve_names_and_flags() {
        let opts = RawOptions {
            template: Some("seo_article"),
            format: Some("html"),
            cta: true,
            writing_guide: true,
            ..Default::default()
        }
        .resolve()
        .unwrap();
        assert_eq!(opts.template, TemplateStyle::SeoArticle);
        assert_eq!(opts.format, OutputFormat::Html);
        assert!(opts.cta && opts.writing_guide);
        assert!(!opts.title && !opts.hashtags && !opts.seo);
    }

    #[test]
    fn resolve_rejects_unknown_names() {
        let err = RawOptions {
            template: Some("kishotenketsu"),
            ..Default::default()
        }
        .resolve()
        .unwrap_err();
        assert!(matches!(err, ArticleError::InvalidInput(_)));

        let err = RawOptions {
            format: Some("pdf"),
            ..Default::default()
        }
        .resolve()
        .unwrap_err();
        assert!(matches!(err, ArticleError::InvalidInput(_)));
    }

    #[test]
    fn status_mapping() {
        assert_eq!(
            completion_status(&CompletionError::RateLimited("q".into())),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            completion_status(&CompletionError::Auth("k".into())),
            StatusCode::BAD_GATEWAY
        );
    }
}
