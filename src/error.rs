//! Unified error types for the ML service.

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Unified error type for the service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Predict endpoint error.
    #[error("predict error: {0}")]
    Predict(#[from] PredictError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors surfaced by the predict endpoint.
///
/// The error messages double as the wire-visible `error` field, so the
/// client-input variants carry the exact user-facing phrasing.
#[derive(Error, Debug)]
pub enum PredictError {
    /// Request carried no "file" part.
    #[error("No file provided")]
    MissingFile,

    /// The "file" part had an empty filename.
    #[error("No file selected")]
    EmptyFilename,

    /// Reading the multipart body failed.
    #[error("invalid multipart body: {0}")]
    Multipart(#[from] MultipartError),

    /// Image decoding or preprocessing failed.
    #[error("{0}")]
    Preprocess(#[from] image::ImageError),
}

impl PredictError {
    /// HTTP status for this error: client input errors map to 400,
    /// processing failures to 500.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingFile | Self::EmptyFilename | Self::Multipart(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Preprocess(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error body: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

impl IntoResponse for PredictError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
