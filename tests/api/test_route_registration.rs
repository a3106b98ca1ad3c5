// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Route registration tests
//!
//! These tests verify that:
//! - /procesar accepts POST and rejects other methods
//! - Unknown routes return 404
//! - CORS headers are attached for cross-origin callers

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
};
use shoulder_mobility_node::api::http_server::{create_app, AppState};
use tower::util::ServiceExt;

#[tokio::test]
async fn test_procesar_rejects_get() {
    let app = create_app(AppState::new_for_test());

    let request = Request::builder()
        .method(Method::GET)
        .uri("/procesar")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_procesar_route_registered() {
    let app = create_app(AppState::new_for_test());

    // Not multipart: the route answers with the JSON error, not a rejection
    let request = Request::builder()
        .method(Method::POST)
        .uri("/procesar")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "No se recibió ningún archivo");
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let app = create_app(AppState::new_for_test());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/procesar/extra")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_headers_present() {
    let app = create_app(AppState::new_for_test());

    let request = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}
