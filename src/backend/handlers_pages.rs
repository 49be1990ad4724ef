//! Handlers of the static storefront pages.

use axum::{
    extract::Query,
    response::{Html, IntoResponse},
    Extension,
};
use http::StatusCode;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::backend::models::SearchQuery;
use crate::config::Config;
use crate::utils::error_messages::AppError;
use crate::HBS;

/// Renders `template` with the page chrome values merged into `data`.
pub(crate) fn render_page(config: &Config, template: &str, mut data: Value) -> Result<Html<String>, AppError> {
    if let Value::Object(map) = &mut data {
        map.insert("announcement".to_string(), json!(config.announcement));
    }
    Ok(Html(HBS.render(template, &data)?))
}

/// Home page
pub async fn index(Extension(config): Extension<Arc<Config>>) -> Result<Html<String>, AppError> {
    render_page(&config, "index", json!({}))
}

/// Contact page. Its form has no submission target.
pub async fn contact(Extension(config): Extension<Arc<Config>>) -> Result<Html<String>, AppError> {
    render_page(&config, "contact", json!({}))
}

/// Header search. There is no catalogue, so the result list is always empty.
pub async fn search(
    Extension(config): Extension<Arc<Config>>,
    Query(params): Query<SearchQuery>,
) -> Result<Html<String>, AppError> {
    let query = params.q.trim();
    log::info!("search for {:?}", query);
    render_page(&config, "search", json!({
        "query": query,
        "results": Vec::<String>::new(),
    }))
}

pub async fn not_found(Extension(config): Extension<Arc<Config>>) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::NOT_FOUND, render_page(&config, "not_found", json!({}))?))
}
