//! Kotoba HTTP server entry point
//!
//! Starts the REST API server for the Kotoba dictionary service.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kotoba::core::config::Config;
use kotoba::core::services::Services;
use kotoba::core::xdg::XdgDirs;
use kotoba::http;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "kotoba=info,tower_http=debug".into());

    let json = std::env::var("KOTOBA_LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    tracing::info!("Starting Kotoba dictionary service");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let xdg = XdgDirs::new();
    xdg.log_paths();

    let config = Config::load_with_xdg(&xdg)?;
    config.log_config();

    // The dictionary is opened once and shared by every request
    let services = Arc::new(Services::new(config.clone())?);
    tracing::info!("Dictionary entries: {}", services.store.entry_count()?);

    let app = http::router(services);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("Service ready - Search at http://{}/search?q=", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
