//! Shared helpers for flashdeck-axum integration tests.

// Each test binary uses a different subset of these helpers
#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use flashdeck_axum::bootstrap::{CorsConfig, bootstrap};
use flashdeck_axum::routes::create_router;

/// Router over a fresh, empty in-memory store.
pub fn test_app() -> Router {
    create_router(bootstrap(), &CorsConfig::AllowAll)
}

/// Send a request and collect the status and full body.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Bytes) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Bytes) {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Bytes) {
    send(
        app,
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

/// POST a raw JSON string with a JSON content type.
pub async fn post_json(app: &Router, uri: &str, body: &str) -> (StatusCode, Bytes) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

/// Parse a response body as JSON.
pub fn body_json(body: &Bytes) -> serde_json::Value {
    serde_json::from_slice(body).unwrap()
}
