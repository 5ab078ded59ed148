// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Schema endpoints - passthrough to `/v1/schema`

use axum::http::StatusCode;
use cedar_console_agent::Schema;

use crate::common::{ApiResult, ApiState, ErrorBody, Json, State};

/// Get the schema.
///
/// Returns `null` when the agent has no schema.
#[utoipa::path(
    get,
    path = "/api/schema",
    responses(
        (status = 200, description = "Current schema, or null", body = serde_json::Value),
        (status = 500, description = "Agent unreachable", body = ErrorBody)
    ),
    tag = "Schema"
)]
pub async fn get_schema(State(state): State<ApiState>) -> ApiResult<Json<Option<Schema>>> {
    Ok(Json(state.agent.get_schema().await?))
}

/// Update the schema.
#[utoipa::path(
    put,
    path = "/api/schema",
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Schema stored", body = serde_json::Value),
        (status = 400, description = "Rejected by the agent", body = ErrorBody)
    ),
    tag = "Schema"
)]
pub async fn replace_schema(
    State(state): State<ApiState>,
    Json(schema): Json<Schema>,
) -> ApiResult<Json<Schema>> {
    Ok(Json(state.agent.replace_schema(&schema).await?))
}

/// Delete the schema.
#[utoipa::path(
    delete,
    path = "/api/schema",
    responses((status = 204, description = "Schema deleted")),
    tag = "Schema"
)]
pub async fn delete_schema(State(state): State<ApiState>) -> ApiResult<StatusCode> {
    state.agent.delete_schema().await?;
    tracing::info!(target: "cedar-console-api", "Deleted schema");
    Ok(StatusCode::NO_CONTENT)
}
