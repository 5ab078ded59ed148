// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Policy endpoints - passthrough to `/v1/policies`

use axum::http::StatusCode;
use cedar_console_agent::{Policy, PolicyUpdate};
use tracing::info;

use crate::common::{ApiResult, ApiState, ErrorBody, Json, Path, State};

/// Get all policies.
#[utoipa::path(
    get,
    path = "/api/policies",
    responses(
        (status = 200, description = "All policies", body = Vec<Policy>),
        (status = 500, description = "Agent unreachable", body = ErrorBody)
    ),
    tag = "Policies"
)]
pub async fn list_policies(State(state): State<ApiState>) -> ApiResult<Json<Vec<Policy>>> {
    Ok(Json(state.agent.list_policies().await?))
}

/// Create a new policy.
#[utoipa::path(
    post,
    path = "/api/policies",
    request_body = Policy,
    responses(
        (status = 200, description = "Policy created", body = Policy),
        (status = 400, description = "Rejected by the agent", body = ErrorBody)
    ),
    tag = "Policies"
)]
pub async fn create_policy(
    State(state): State<ApiState>,
    Json(policy): Json<Policy>,
) -> ApiResult<Json<Policy>> {
    let created = state.agent.create_policy(&policy).await?;
    info!(target: "cedar-console-api", "Created policy '{}'", created.id);
    Ok(Json(created))
}

/// Replace all policies.
#[utoipa::path(
    put,
    path = "/api/policies",
    request_body = Vec<Policy>,
    responses(
        (status = 200, description = "Policy set replaced", body = Vec<Policy>),
        (status = 400, description = "Rejected by the agent", body = ErrorBody)
    ),
    tag = "Policies"
)]
pub async fn replace_policies(
    State(state): State<ApiState>,
    Json(policies): Json<Vec<Policy>>,
) -> ApiResult<Json<Vec<Policy>>> {
    let stored = state.agent.replace_policies(&policies).await?;
    info!(target: "cedar-console-api", "Replaced policy set ({} policies)", stored.len());
    Ok(Json(stored))
}

/// Get a policy by ID.
#[utoipa::path(
    get,
    path = "/api/policies/{id}",
    params(("id" = String, Path, description = "Policy ID")),
    responses(
        (status = 200, description = "The policy", body = Policy),
        (status = 404, description = "No such policy", body = ErrorBody)
    ),
    tag = "Policies"
)]
pub async fn get_policy(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Policy>> {
    Ok(Json(state.agent.get_policy(&id).await?))
}

/// Update a policy.
#[utoipa::path(
    put,
    path = "/api/policies/{id}",
    params(("id" = String, Path, description = "Policy ID")),
    request_body = PolicyUpdate,
    responses(
        (status = 200, description = "Policy updated", body = Policy),
        (status = 404, description = "No such policy", body = ErrorBody)
    ),
    tag = "Policies"
)]
pub async fn update_policy(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    Json(update): Json<PolicyUpdate>,
) -> ApiResult<Json<Policy>> {
    let updated = state.agent.update_policy(&id, &update).await?;
    info!(target: "cedar-console-api", "Updated policy '{}'", updated.id);
    Ok(Json(updated))
}

/// Delete a policy.
#[utoipa::path(
    delete,
    path = "/api/policies/{id}",
    params(("id" = String, Path, description = "Policy ID")),
    responses(
        (status = 204, description = "Policy deleted"),
        (status = 404, description = "No such policy", body = ErrorBody)
    ),
    tag = "Policies"
)]
pub async fn delete_policy(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.agent.delete_policy(&id).await?;
    info!(target: "cedar-console-api", "Deleted policy '{}'", id);
    Ok(StatusCode::NO_CONTENT)
}
