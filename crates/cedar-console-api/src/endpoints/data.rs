// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Entity store endpoints - passthrough to `/v1/data`

use axum::http::StatusCode;
use cedar_console_agent::Entity;

use crate::common::{ApiResult, ApiState, ErrorBody, Json, State};

/// Get all entities.
#[utoipa::path(
    get,
    path = "/api/data",
    responses(
        (status = 200, description = "All entities", body = Vec<Entity>),
        (status = 500, description = "Agent unreachable", body = ErrorBody)
    ),
    tag = "Entities"
)]
pub async fn list_entities(State(state): State<ApiState>) -> ApiResult<Json<Vec<Entity>>> {
    Ok(Json(state.agent.list_entities().await?))
}

/// Replace all entities.
#[utoipa::path(
    put,
    path = "/api/data",
    request_body = Vec<Entity>,
    responses(
        (status = 200, description = "Entity store replaced", body = Vec<Entity>),
        (status = 400, description = "Rejected by the agent", body = ErrorBody)
    ),
    tag = "Entities"
)]
pub async fn replace_entities(
    State(state): State<ApiState>,
    Json(entities): Json<Vec<Entity>>,
) -> ApiResult<Json<Vec<Entity>>> {
    Ok(Json(state.agent.replace_entities(&entities).await?))
}

/// Delete all entities.
#[utoipa::path(
    delete,
    path = "/api/data",
    responses((status = 204, description = "Entity store cleared")),
    tag = "Entities"
)]
pub async fn delete_entities(State(state): State<ApiState>) -> ApiResult<StatusCode> {
    state.agent.delete_entities().await?;
    tracing::info!(target: "cedar-console-api", "Cleared entity store");
    Ok(StatusCode::NO_CONTENT)
}
