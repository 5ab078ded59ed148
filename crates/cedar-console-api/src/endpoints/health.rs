// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Agent connectivity check

use axum::http::StatusCode;
use cedar_console_agent::HealthStatus;

use crate::common::{ApiState, Json, State};

/// Check Cedar Agent connection.
///
/// 200 when the agent answered at all, 503 when it could not be reached.
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Agent reachable", body = HealthStatus),
        (status = 503, description = "Agent unreachable", body = HealthStatus)
    ),
    tag = "Health"
)]
pub async fn get_health(State(state): State<ApiState>) -> (StatusCode, Json<HealthStatus>) {
    let health = state.agent.health().await;
    let status = if health.is_connected() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(health))
}
