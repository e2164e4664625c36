// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalia Health

//! Integration tests for the assembled application router
//!
//! Exercises the full middleware stack (CORS, request IDs, tracing) around
//! the calculator and health routes.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;
use vitalia_wellness_server::{
    config::environment::{Environment, LogLevel, ServerConfig},
    server::build_router,
};

fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        host: "127.0.0.1".to_owned(),
        log_level: LogLevel::Info,
        environment: Environment::Testing,
        cors_origins: vec!["*".to_owned()],
    }
}

#[tokio::test]
async fn test_router_serves_calculators_and_probes() {
    let app = build_router(&test_config());

    let bmi_response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/bmi")
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({"weight": 70, "height": 175})).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(bmi_response.status(), StatusCode::OK);

    let health_response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(health_response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_router_attaches_request_id() {
    let app = build_router(&test_config());

    let response = app
        .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert!(response.headers().get("x-request-id").is_some());
}

#[tokio::test]
async fn test_validation_error_envelope_through_full_stack() {
    let app = build_router(&test_config());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/bmi")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&json!({})).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!("Weight and height are required"));
}
