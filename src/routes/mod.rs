//! HTTP routes for the proxy
//!
//! This module defines all HTTP endpoints exposed by the proxy.

pub mod generate;
pub mod health;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{any, get},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Largest accepted request body. Payloads may carry inline base64 images.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Create the main application router
///
/// No CORS layer: cross-origin callers would spend the server's key, and a
/// preflight answered by middleware would bypass the POST-only rule.
pub fn create_router(state: Arc<AppState>) -> Router {
    let proxy_routes = Router::new()
        .route("/api/recognize-stock", any(generate::generate_content))
        .route("/api/generate", any(generate::generate_content))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES));

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::liveness_check));

    Router::new()
        .merge(public_routes)
        .merge(proxy_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
