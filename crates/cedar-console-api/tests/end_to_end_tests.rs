// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// Proxy -> HttpCedarAgent -> mock Cedar agent

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use cedar_console_agent::HttpCedarAgent;
use cedar_console_api::{create_http_server, ApiState};
use cedar_console_config::ServerConfig;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn call(server: &MockServer, method_name: &str, uri: &str) -> (StatusCode, Value) {
    let agent = HttpCedarAgent::new(&server.uri(), Duration::from_secs(5)).unwrap();
    let app = create_http_server(ApiState::new(Arc::new(agent)), &ServerConfig::default());

    let response = app
        .oneshot(Request::builder().method(method_name).uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn agent_error_status_and_text_pass_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/policies/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Policy not found"))
        .mount(&server)
        .await;

    let (status, body) = call(&server, "GET", "/api/policies/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Policy not found"}));
}

#[tokio::test]
async fn encoded_policy_id_reaches_agent_as_one_segment() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/policies/team%20a"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let (status, _) = call(&server, "DELETE", "/api/policies/team%20a").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn absent_schema_reads_as_null() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/schema"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let (status, body) = call(&server, "GET", "/api/schema").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn health_with_agent_up() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(&server)
        .await;

    let (status, body) = call(&server, "GET", "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "connected", "message": "OK"}));
}

#[tokio::test]
async fn health_with_agent_failing_is_still_connected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let (status, body) = call(&server, "GET", "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "connected", "message": "boom"}));
}
