//! Test helper utilities for homepage integration tests

#![allow(dead_code)] // Not every test binary uses every helper

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use std::net::SocketAddr;
use tower::ServiceExt;

/// Create a test socket address; the router tests never bind it
pub fn create_test_address() -> SocketAddr {
    "127.0.0.1:3000".parse().unwrap()
}

/// Send a GET request through the router without a network listener
pub async fn get(router: Router, uri: &str) -> Response<Body> {
    router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Collect a response body as UTF-8 text
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Collect a response body as JSON
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}
