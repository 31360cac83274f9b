//! HTTP test utilities for integration tests.
//!
//! Builds the production router with fixed build metadata so responses are
//! predictable.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use pipeline_hardening_poc::{app::build_router, build_info::BuildInfo};

pub fn test_build_info() -> BuildInfo {
    BuildInfo {
        version: "1.0.0",
        build_time: "2024-06-01T12:00:00Z",
        git_commit: "0123456789abcdef",
        runtime_version: "rustc 1.90.0",
    }
}

/// Create a test router with fixed build metadata.
pub fn test_app() -> Router {
    build_router(test_build_info())
}

/// Send a request with the given method and path through a fresh router.
pub async fn send(method: &str, uri: &str) -> Response {
    test_app()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn get(uri: &str) -> Response {
    send("GET", uri).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Helper to parse JSON response body.
pub async fn parse_json_body(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

pub fn content_type(response: &Response) -> String {
    response
        .headers()
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

pub fn assert_ok(response: &Response) {
    assert_eq!(response.status(), StatusCode::OK);
}
