//! Shared setup of the HTTP tests.

use std::sync::Arc;
use axum_test::{TestServer, TestServerConfig};
use crate::backend::router::get_router;
use crate::config::Config;

/// A server over the full router that keeps the session cookie between
/// requests, like a browser would.
pub(crate) fn test_server() -> TestServer {
    let config = TestServerConfig {
        save_cookies: true,
        ..TestServerConfig::default()
    };
    TestServer::new_with_config(get_router(Arc::new(Config::default())), config)
        .expect("Failed to start test server")
}
