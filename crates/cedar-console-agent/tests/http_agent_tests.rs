// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! HttpCedarAgent against a mock Cedar agent

use std::time::Duration;

use cedar_console_agent::console::{gather_overview, AuthorizeForm, PolicyForm};
use cedar_console_agent::*;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> HttpCedarAgent {
    HttpCedarAgent::new(&server.uri(), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn health_reports_connected_with_agent_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(&server)
        .await;

    let health = client(&server).health().await;
    assert_eq!(health, HealthStatus::Connected { message: "OK".to_string() });
}

#[tokio::test]
async fn health_reports_connected_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let health = client(&server).health().await;
    assert_eq!(health, HealthStatus::Connected { message: "boom".to_string() });
}

#[tokio::test]
async fn health_reports_disconnected_when_unreachable() {
    // Nothing listens on port 9 of localhost in the test environment
    let agent = HttpCedarAgent::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
    assert!(matches!(agent.health().await, HealthStatus::Disconnected { .. }));
}

#[tokio::test]
async fn list_and_get_policies() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/policies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "p1", "content": "permit(principal, action, resource);"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/policies/team%2Fp%201"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(
            {"id": "team/p 1", "content": "forbid(principal, action, resource);"}
        )))
        .mount(&server)
        .await;

    let agent = client(&server);
    let policies = agent.list_policies().await.unwrap();
    assert_eq!(policies, vec![Policy::new("p1", "permit(principal, action, resource);")]);

    let policy = agent.get_policy("team/p 1").await.unwrap();
    assert_eq!(policy.id, "team/p 1");
}

#[tokio::test]
async fn upstream_error_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/policies/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "reason": "Not Found",
            "description": "Policy missing not found",
            "code": 404
        })))
        .mount(&server)
        .await;

    let err = client(&server).get_policy("missing").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.detail(), "Policy missing not found");
}

#[tokio::test]
async fn malformed_json_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/data"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let err = client(&server).list_entities().await.unwrap_err();
    assert!(matches!(err, AgentError::Decode(_)));
}

#[tokio::test]
async fn unit_operations_accept_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/policies/p1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/data"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/schema"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let agent = client(&server);
    agent.delete_policy("p1").await.unwrap();
    agent.delete_entities().await.unwrap();
    agent.delete_schema().await.unwrap();
}

#[tokio::test]
async fn schema_absent_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/schema"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no schema"))
        .mount(&server)
        .await;

    assert_eq!(client(&server).get_schema().await.unwrap(), None);
}

#[tokio::test]
async fn schema_server_error_is_not_swallowed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/schema"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client(&server).get_schema().await.unwrap_err();
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn replace_operations_send_json_bodies() {
    let server = MockServer::start().await;
    let entities = console::sample_entities();
    Mock::given(method("PUT"))
        .and(path("/v1/data"))
        .and(header("content-type", "application/json"))
        .and(body_json(&entities))
        .respond_with(ResponseTemplate::new(200).set_body_json(&entities))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/v1/schema"))
        .and(body_json(console::sample_schema()))
        .respond_with(ResponseTemplate::new(200).set_body_json(console::sample_schema()))
        .expect(1)
        .mount(&server)
        .await;

    let agent = client(&server);
    assert_eq!(agent.replace_entities(&entities).await.unwrap().len(), 7);
    assert_eq!(agent.replace_schema(&console::sample_schema()).await.unwrap(), console::sample_schema());
}

#[tokio::test]
async fn authorize_form_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/is_authorized"))
        .and(body_json(json!({
            "principal": "User::\"alice\"",
            "action": "Action::\"view\"",
            "resource": "Document::\"doc1\"",
            "context": {}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "decision": "Allow",
            "diagnostics": {"reason": ["policy0"], "errors": []}
        })))
        .mount(&server)
        .await;

    let response = AuthorizeForm::default().submit(&client(&server)).await.unwrap();
    assert_eq!(response.decision, Decision::Allow);
    assert_eq!(response.diagnostics.reason, vec!["policy0"]);
}

#[tokio::test]
async fn authorize_form_with_bad_context_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let form = AuthorizeForm {
        context: "{oops".to_string(),
        ..Default::default()
    };
    assert!(matches!(form.submit(&client(&server)).await, Err(FormError::InvalidContext)));
}

#[tokio::test]
async fn policy_form_create_and_edit() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/policies"))
        .and(body_json(json!({"id": "p-new", "content": console::DEFAULT_POLICY_TEMPLATE})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(
            {"id": "p-new", "content": console::DEFAULT_POLICY_TEMPLATE}
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/v1/policies/p-old"))
        .and(body_json(json!({"content": "forbid(principal, action, resource);"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(
            {"id": "p-old", "content": "forbid(principal, action, resource);"}
        )))
        .expect(1)
        .mount(&server)
        .await;

    let agent = client(&server);

    let mut create = PolicyForm::create();
    assert!(matches!(create.submit(&agent).await, Err(FormError::MissingPolicyId)));
    create.id = "  p-new ".to_string();
    assert_eq!(create.submit(&agent).await.unwrap().id, "p-new");

    let mut edit = PolicyForm::edit(&Policy::new("p-old", "permit(principal, action, resource);"));
    edit.content = "forbid(principal, action, resource);".to_string();
    assert_eq!(edit.submit(&agent).await.unwrap().id, "p-old");
}

#[tokio::test]
async fn overview_degrades_failed_counts_to_zero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/policies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "a", "content": "x"},
            {"id": "b", "content": "y"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/data"))
        .respond_with(ResponseTemplate::new(500).set_body_string("store offline"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(&server)
        .await;

    let overview = gather_overview(&client(&server)).await;
    assert_eq!(overview.policy_count, 2);
    assert_eq!(overview.entity_count, 0);
    assert!(overview.healthy());
}

#[tokio::test]
async fn scenario_load_against_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/policies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "stale", "content": "x"}])))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/policies/stale"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    for p in ["/v1/data", "/v1/schema"] {
        Mock::given(method("DELETE"))
            .and(path(p))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
    }

    let scenario = find_scenario("doc-share").unwrap();
    Mock::given(method("PUT"))
        .and(path("/v1/schema"))
        .and(body_json(&scenario.schema))
        .respond_with(ResponseTemplate::new(200).set_body_json(&scenario.schema))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/v1/data"))
        .and(body_json(&scenario.entities))
        .respond_with(ResponseTemplate::new(200).set_body_json(&scenario.entities))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/v1/policies"))
        .and(body_json(&scenario.policies))
        .respond_with(ResponseTemplate::new(200).set_body_json(&scenario.policies))
        .expect(1)
        .mount(&server)
        .await;

    let report = load_scenario(&client(&server), &scenario).await.unwrap();
    assert_eq!(report.policies_removed, 1);
    assert_eq!(report.policies_loaded, 2);
    assert_eq!(report.entities_loaded, 4);
}
