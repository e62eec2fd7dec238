use articlegen_core::{GenerationOptions, Keyword};
use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::get,
    Form, Router,
};
use serde::Deserialize;

use super::{completion_status, AppState, RawOptions};
use crate::html::{self, Outcome};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(basic_form).post(basic_submit))
        .route("/premium", get(premium_form).post(premium_submit))
}

#[derive(Debug, Deserialize)]
struct BasicForm {
    #[serde(default)]
    keyword: String,
}

/// Unchecked checkboxes are simply absent from the submission.
#[derive(Debug, Deserialize)]
struct PremiumForm {
    #[serde(default)]
    keyword: String,
    template: Option<String>,
    format: Option<String>,
    title: Option<String>,
    cta: Option<String>,
    hashtags: Option<String>,
    writing_guide: Option<String>,
    seo: Option<String>,
}

type Page = (StatusCode, Html<String>);

async fn basic_form() -> Html<String> {
    Html(html::basic_page("", &Outcome::Blank))
}

async fn basic_submit(State(state): State<AppState>, Form(form): Form<BasicForm>) -> Page {
    let keyword = match Keyword::parse(&form.keyword) {
        Ok(k) => k,
        Err(e) => {
            let page = html::basic_page(&form.keyword, &Outcome::Failure(e.to_string()));
            return (StatusCode::BAD_REQUEST, Html(page));
        }
    };

    match state.pipeline.run_basic(&keyword).await {
        Ok(output) => (
            StatusCode::OK,
            Html(html::basic_page(&form.keyword, &Outcome::Success(&output))),
        ),
        Err(e) => (
            completion_status(&e),
            Html(html::basic_page(&form.keyword, &Outcome::Failure(e.to_string()))),
        ),
    }
}

async fn premium_form() -> Html<String> {
    Html(html::premium_page(
        "",
        &GenerationOptions::default(),
        &Outcome::Blank,
    ))
}

async fn premium_submit(State(state): State<AppState>, Form(form): Form<PremiumForm>) -> Page {
    let raw = RawOptions {
        template: form.template.as_deref(),
        format: form.format.as_deref(),
        title: form.title.is_some(),
        cta: form.cta.is_some(),
        hashtags: form.hashtags.is_some(),
        writing_guide: form.writing_guide.is_some(),
        seo: form.seo.is_some(),
    };
    let options = match raw.resolve() {
        Ok(o) => o,
        Err(e) => {
            let page = html::premium_page(
                &form.keyword,
                &GenerationOptions::default(),
                &Outcome::Failure(e.to_string()),
            );
            return (StatusCode::BAD_REQUEST, Html(page));
        }
    };
    let keyword = match Keyword::parse(&form.keyword) {
        Ok(k) => k,
        Err(e) => {
            let page =
                html::premium_page(&form.keyword, &options, &Outcome::Failure(e.to_string()));
            return (StatusCode::BAD_REQUEST, Html(page));
        }
    };

    match state.pipeline.run(&keyword, &options).await {
        Ok(output) => (
            StatusCode::OK,
            Html(html::premium_page(&form.keyword, &options, &Outcome::Success(&output))),
        ),
        Err(e) => (
            completion_status(&e),
            Html(html::premium_page(&form.keyword, &options, &Outcome::Failure(e.to_string()))),
        ),
    }
}
