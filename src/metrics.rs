//! Prometheus metrics for the predict endpoint.
//!
//! This module provides metrics for:
//! - Placeholder predictions served
//! - Preprocessing failures
//! - Preprocessing latency

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use tracing::debug;

// === Metric Name Constants ===

/// Predict requests served counter metric name.
pub const METRIC_PREDICT_REQUESTS: &str = "predict_requests_total";
/// Predict failures counter metric name.
pub const METRIC_PREDICT_FAILURES: &str = "predict_failures_total";
/// Preprocessing latency metric name.
pub const METRIC_PREPROCESS_LATENCY: &str = "preprocess_latency_ms";

static PROMETHEUS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Install the Prometheus recorder and register metric descriptions.
///
/// Safe to call more than once; subsequent calls return the handle
/// installed by the first.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    let handle = PROMETHEUS_HANDLE
        .get_or_try_init(|| PrometheusBuilder::new().install_recorder())?;

    describe_counter!(
        METRIC_PREDICT_REQUESTS,
        "Total number of predict requests that returned a placeholder prediction"
    );
    describe_counter!(
        METRIC_PREDICT_FAILURES,
        "Total number of predict requests that failed preprocessing"
    );
    describe_histogram!(
        METRIC_PREPROCESS_LATENCY,
        "Image preprocessing latency in milliseconds"
    );

    debug!("Metrics initialized");

    Ok(handle.clone())
}

/// Record a served prediction and its preprocessing latency.
pub fn record_prediction(start: Instant) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    counter!(METRIC_PREDICT_REQUESTS).increment(1);
    histogram!(METRIC_PREPROCESS_LATENCY).record(latency_ms);
}

/// Increment the preprocessing failure counter.
pub fn inc_predict_failures() {
    counter!(METRIC_PREDICT_FAILURES).increment(1);
}
