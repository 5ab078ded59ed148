// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// HTTP server implementation (Axum)
//
// Sets up the proxy with routing, middleware and shared state. Every `/api`
// route forwards to the Cedar agent behind `ApiState::agent`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::{get, post},
    Router,
};
use cedar_console_agent::CedarAgent;
use cedar_console_config::ServerConfig;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::common::ErrorBody;
use crate::middleware::cors::create_cors_layer;
use crate::openapi::{ApiDoc, OPENAPI_JSON_PATH, SWAGGER_UI_PATH};

/// Application state shared across all HTTP handlers
#[derive(Clone)]
pub struct ApiState {
    pub agent: Arc<dyn CedarAgent>,
}

impl ApiState {
    pub fn new(agent: Arc<dyn CedarAgent>) -> Self {
        Self { agent }
    }
}

/// Create the main HTTP application
pub fn create_http_server(state: ApiState, config: &ServerConfig) -> Router {
    Router::new()
        // Root redirect to Swagger UI
        .route("/", get(root_redirect))
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
        .nest("/api", create_api_router())
        .fallback(|uri: axum::http::Uri| async move {
            tracing::warn!(target: "cedar-console-api", "Unmatched request - 404 Not Found: {}", uri);
            (
                StatusCode::NOT_FOUND,
                crate::common::Json(ErrorBody {
                    error: format!("No route for {}", uri.path()),
                }),
            )
                .into_response()
        })
        .with_state(state)
        .layer(create_cors_layer(config))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::span!(
                        target: "cedar-console-api",
                        tracing::Level::DEBUG,
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                })
                .on_request(|request: &axum::http::Request<_>, _span: &tracing::Span| {
                    tracing::debug!(target: "cedar-console-api", "Incoming request: {} {}", request.method(), request.uri());
                })
                .on_response(|response: &axum::http::Response<_>, latency: std::time::Duration, _span: &tracing::Span| {
                    tracing::debug!(
                        target: "cedar-console-api",
                        "Response: status={}, latency={:?}",
                        response.status(),
                        latency
                    );
                })
                .on_failure(|error: tower_http::classify::ServerErrorsFailureClass, latency: std::time::Duration, _span: &tracing::Span| {
                    tracing::error!(target: "cedar-console-api", "Request failed: {}, latency={:?}", error, latency);
                }),
        )
}

/// `/api/*` routes
fn create_api_router() -> Router<ApiState> {
    use crate::endpoints::{authorize, data, health, overview, policies, scenarios, schema};

    Router::new()
        .route("/health", get(health::get_health))
        .route("/overview", get(overview::get_overview))
        // ===== POLICIES =====
        .route(
            "/policies",
            get(policies::list_policies)
                .post(policies::create_policy)
                .put(policies::replace_policies),
        )
        .route(
            "/policies/:id",
            get(policies::get_policy)
                .put(policies::update_policy)
                .delete(policies::delete_policy),
        )
        // ===== ENTITIES =====
        .route(
            "/data",
            get(data::list_entities)
                .put(data::replace_entities)
                .delete(data::delete_entities),
        )
        // ===== SCHEMA =====
        .route(
            "/schema",
            get(schema::get_schema)
                .put(schema::replace_schema)
                .delete(schema::delete_schema),
        )
        // ===== AUTHORIZATION =====
        .route("/authorize", post(authorize::post_authorize))
        // ===== SCENARIOS =====
        .route("/scenarios", get(scenarios::list_scenarios))
        .route("/scenarios/:id/load", post(scenarios::post_load_scenario))
}

async fn root_redirect() -> Redirect {
    Redirect::temporary(&format!("{}/", SWAGGER_UI_PATH))
}

/// Bind `config.bind_address()` and serve until Ctrl-C
pub async fn run_http_server(state: ApiState, config: &ServerConfig) -> std::io::Result<()> {
    let app = create_http_server(state, config);
    let listener = TcpListener::bind(config.bind_address()).await?;
    tracing::info!(
        target: "cedar-console-api",
        "Cedar Console listening on http://{} (docs at {}/)",
        listener.local_addr()?,
        SWAGGER_UI_PATH
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(target: "cedar-console-api", "Failed to listen for shutdown signal: {}", e);
            }
            tracing::info!(target: "cedar-console-api", "Shutting down");
        })
        .await
}
