// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Authorization check - passthrough to `/v1/is_authorized`

use cedar_console_agent::{AuthorizationRequest, AuthorizationResponse};

use crate::common::{ApiResult, ApiState, ErrorBody, Json, State};

/// Check authorization.
#[utoipa::path(
    post,
    path = "/api/authorize",
    request_body = AuthorizationRequest,
    responses(
        (status = 200, description = "Decision with diagnostics", body = AuthorizationResponse),
        (status = 400, description = "Rejected by the agent", body = ErrorBody)
    ),
    tag = "Authorization"
)]
pub async fn post_authorize(
    State(state): State<ApiState>,
    Json(request): Json<AuthorizationRequest>,
) -> ApiResult<Json<AuthorizationResponse>> {
    let response = state.agent.is_authorized(&request).await?;
    tracing::debug!(
        target: "cedar-console-api",
        "is_authorized {:?} {:?} {:?} -> {}",
        request.principal, request.action, request.resource, response.decision
    );
    Ok(Json(response))
}
