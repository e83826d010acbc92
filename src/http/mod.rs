//! HTTP REST adapter
//!
//! Depends only on core/. Never imports from cli/.
//!
//! Provides the dictionary search endpoint, a liveness message and a
//! health check via the Axum web framework.

pub mod error;
pub mod handlers;
pub mod middleware;

pub use handlers::*;

use std::sync::Arc;

use axum::{middleware as axum_middleware, routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::core::services::Services;

/// Build the API router with logging and permissive CORS
pub fn router(services: Arc<Services>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/search", get(search_handler))
        .layer(axum_middleware::from_fn(middleware::log_request))
        .layer(CorsLayer::permissive())
        .with_state(services)
}
