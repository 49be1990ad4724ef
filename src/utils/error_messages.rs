//! Represents all possible errors in the application

use axum::response::{Html, IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

pub const RENDER_ERROR: &str = "Rendering failed";

pub const SESSION_ERROR: &str = "Session unavailable";

/// Infrastructure failures of the web layer. Validation failures are not
/// errors at this level: they are rendered back into the form.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("template rendering failed: {0}")]
    Render(#[from] handlebars::RenderError),
    #[error("session store failed: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        log::error!("{}", self);
        let message = match self {
            AppError::Render(_) => RENDER_ERROR,
            AppError::Session(_) => SESSION_ERROR,
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Html(format!("<h1>{}</h1>", message))).into_response()
    }
}
