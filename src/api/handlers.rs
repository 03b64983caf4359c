//! HTTP API handlers.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Multipart, State};
use axum::response::IntoResponse;
use axum::Json;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::PredictError;
use crate::metrics;
use crate::preprocess::preprocess_image;

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration.
    pub config: Arc<Config>,
    /// Handle for rendering Prometheus metrics.
    pub metrics: PrometheusHandle,
}

impl AppState {
    /// Create new app state.
    pub fn new(config: Config, metrics: PrometheusHandle) -> Self {
        Self {
            config: Arc::new(config),
            metrics,
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "healthy".
    pub status: &'static str,
    /// Service identifier.
    pub service: &'static str,
}

/// Predict response. The prediction and confidence are literal placeholders;
/// no model inference happens anywhere in this service.
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    /// Placeholder class label.
    pub prediction: &'static str,
    /// Placeholder confidence score.
    pub confidence: f64,
    /// Note to integrators.
    pub message: &'static str,
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        service: "ml_service",
    })
}

/// Predict handler.
///
/// Accepts a multipart form with a "file" part, preprocesses the image for a
/// convolutional classifier, and returns a fixed placeholder prediction
/// regardless of image content. Missing or unnamed uploads are client errors;
/// decode failures surface as server errors with the decoder's message.
pub async fn predict(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<PredictResponse>, PredictError> {
    let mut upload = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            return Err(PredictError::EmptyFilename);
        }

        let data = field.bytes().await?;
        upload = Some((filename, data));
        break;
    }

    let (filename, data) = upload.ok_or(PredictError::MissingFile)?;
    debug!(filename = %filename, bytes = data.len(), "Received upload");

    let start = Instant::now();
    let input = match preprocess_image(&data, state.config.image_size) {
        Ok(tensor) => tensor,
        Err(e) => {
            warn!(filename = %filename, "Preprocessing failed: {}", e);
            metrics::inc_predict_failures();
            return Err(e.into());
        }
    };
    metrics::record_prediction(start);

    // The tensor is where inference would start; for now it is discarded.
    info!(
        filename = %filename,
        shape = ?input.shape(),
        "Image preprocessed; returning placeholder prediction"
    );

    Ok(Json(PredictResponse {
        prediction: "placeholder_prediction",
        confidence: 0.95,
        message: "Model prediction endpoint - implement your ML logic here",
    }))
}

/// Metrics handler - renders the Prometheus text exposition.
pub async fn render_metrics(State(state): State<AppState>) -> String {
    state.metrics.render()
}
