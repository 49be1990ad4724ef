//! Main entry point of the storefront.
//! Loads the settings, registers the Handlebars templates,
//! and starts the web server with Axum.

mod backend;
mod config;
mod consts;
mod forms;
mod utils;

use std::{net::SocketAddr, sync::Arc};
use anyhow::{Context, Result};
use dotenv::dotenv;
use handlebars::Handlebars;
use log::info;
use once_cell::sync::Lazy;
use crate::config::Config;

/// Templates embedded in the binary, registered under their file name.
/// Every template is also available as a partial.
const TEMPLATES: &[(&str, &str)] = &[
    ("head", include_str!("../templates/head.hbs")),
    ("foot", include_str!("../templates/foot.hbs")),
    ("announcement", include_str!("../templates/announcement.hbs")),
    ("header", include_str!("../templates/header.hbs")),
    ("index", include_str!("../templates/index.hbs")),
    ("contact", include_str!("../templates/contact.hbs")),
    ("login", include_str!("../templates/login.hbs")),
    ("register", include_str!("../templates/register.hbs")),
    ("search", include_str!("../templates/search.hbs")),
    ("not_found", include_str!("../templates/not_found.hbs")),
];

// Handlebars registry used to render every page
static HBS: Lazy<Handlebars> = Lazy::new(|| {
    let mut hbs = Handlebars::new();
    for (name, source) in TEMPLATES {
        hbs.register_template_string(name, source)
            .expect("Could not register template");
    }
    hbs
});

#[tokio::main]
async fn main() -> Result<()> {
    // Load the environment variables
    dotenv().ok();
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = Arc::new(Config::from_env().context("Invalid configuration")?);
    Lazy::force(&HBS);

    let app = backend::router::get_router(config.clone());

    // Start the web server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to open web server listener")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Failed to serve the storefront")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
