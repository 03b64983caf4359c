//! Integration tests for the ML service HTTP API.
//!
//! These drive the router directly with `tower::ServiceExt::oneshot`, so no
//! socket is bound. Multipart bodies are constructed by hand and the valid
//! upload case encodes a real PNG in memory.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use image::{DynamicImage, Rgb, RgbImage};
use pretty_assertions::assert_eq;
use std::io::Cursor;
use tower::ServiceExt;

use ml_service::api::{create_router, AppState};
use ml_service::config::Config;
use ml_service::metrics;

const BOUNDARY: &str = "----ml-service-test-boundary";

/// Build the router with default configuration.
fn test_app() -> Router {
    let handle = metrics::init_metrics().expect("metrics recorder");
    create_router(AppState::new(Config::default(), handle))
}

/// Assemble a multipart/form-data body from (name, filename, data) parts.
fn multipart_body(parts: &[(&str, Option<&str>, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();

    for (name, filename, data) in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match filename {
            Some(filename) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                     Content-Type: application/octet-stream\r\n\r\n"
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
            ),
        }
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn predict_request(body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/predict")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

/// Encode a uniform-color PNG in memory.
fn png_bytes(width: u32, height: u32, color: [u8; 3]) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb(color));
    let mut buf = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_returns_healthy_status() {
    let app = test_app();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "ml_service");
}

#[tokio::test]
async fn predict_without_file_field_returns_400() {
    let app = test_app();
    let body = multipart_body(&[("note", None, b"no file here")]);

    let response = app.oneshot(predict_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(body["error"], "No file provided");
}

#[tokio::test]
async fn predict_with_empty_filename_returns_400() {
    let app = test_app();
    let body = multipart_body(&[("file", Some(""), b"some bytes")]);

    let response = app.oneshot(predict_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(body["error"], "No file selected");
}

#[tokio::test]
async fn predict_with_valid_image_returns_placeholder() {
    let app = test_app();
    let png = png_bytes(64, 64, [200, 50, 10]);
    let body = multipart_body(&[("file", Some("photo.png"), &png)]);

    let response = app.oneshot(predict_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["prediction"], "placeholder_prediction");
    assert_eq!(body["confidence"], 0.95);
    assert_eq!(
        body["message"],
        "Model prediction endpoint - implement your ML logic here"
    );
}

#[tokio::test]
async fn predict_is_independent_of_image_content() {
    let app = test_app();

    let mut bodies = Vec::new();
    for color in [[0u8, 0, 0], [255, 255, 255]] {
        let png = png_bytes(32, 48, color);
        let body = multipart_body(&[("file", Some("img.png"), &png)]);

        let response = app.clone().oneshot(predict_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        bodies.push(json_body(response).await);
    }

    assert_eq!(bodies[0], bodies[1]);
}

#[tokio::test]
async fn predict_with_corrupt_bytes_returns_500() {
    let app = test_app();
    let body = multipart_body(&[("file", Some("corrupt.png"), b"not an image at all")]);

    let response = app.oneshot(predict_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = json_body(response).await;
    let message = body["error"].as_str().unwrap();
    assert!(!message.is_empty(), "error field should carry the decode reason");
}
