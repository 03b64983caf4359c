//! Image classification HTTP service stub.
//!
//! This service exposes a health-check endpoint and an image-upload endpoint
//! that preprocesses an uploaded image for a convolutional classifier. No
//! model is loaded and no inference runs: `/predict` returns a hardcoded
//! placeholder prediction after decoding, resizing, and normalizing the
//! image ResNet-50 style.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`preprocess`]: Image decoding and model-input preprocessing
//! - [`api`]: HTTP API routes and handlers
//! - [`metrics`]: Prometheus metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod preprocess;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError};
