//! HTTP API route definitions.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers::{health, predict, render_metrics, AppState};

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        // Health endpoint
        .route("/health", get(health))
        // Predict endpoint
        .route("/predict", post(predict))
        // Metrics endpoint
        .route("/metrics", get(render_metrics))
        .layer(body_limit)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
