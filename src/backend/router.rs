//! Route configuration for the storefront.
//! Wires the pages to their handlers and installs the session and CORS layers.

use std::sync::Arc;
use axum::{Extension, Router, routing::get, BoxError};
use axum::error_handling::HandleErrorLayer;
use http::StatusCode;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_sessions::{MemoryStore, SessionManagerLayer};
use crate::backend::handlers_forms::{login_page, login_submit, register_page, register_submit};
use crate::backend::handlers_pages::{contact, index, not_found, search};
use crate::config::Config;

/// Builds the main router and its middleware stack
pub fn get_router(config: Arc<Config>) -> Router {
    // Form state lives in memory for the lifetime of the visitor's session
    let store = MemoryStore::default();
    let session_manager = SessionManagerLayer::new(store)
        .with_http_only(true)
        .with_secure(false);

    let service = ServiceBuilder::new()
        .layer(HandleErrorLayer::new(|_e: BoxError| async move {
            StatusCode::BAD_REQUEST
        }))
        .layer(session_manager);

    let router = page_routes()
        .merge(form_routes())
        .fallback(not_found)
        .layer(service)
        .layer(Extension(config));

    // Allow any origin in debug builds only
    if cfg!(debug_assertions) {
        let cors = CorsLayer::new()
            .allow_methods(tower_http::cors::AllowMethods::any())
            .allow_origin(Any);
        router.layer(cors)
    } else {
        router
    }
}

/// Static pages
fn page_routes() -> Router {
    Router::new()
        .route("/", get(index)) // Home page
        .route("/contact", get(contact)) // Contact page with the static form
        .route("/search", get(search)) // Header search box
}

/// Pages backed by per-session form state
fn form_routes() -> Router {
    Router::new()
        .route("/login", get(login_page).post(login_submit)) // Login and recovery panels
        .route("/register", get(register_page).post(register_submit)) // Account registration
}
