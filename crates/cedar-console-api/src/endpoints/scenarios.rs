// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Built-in scenarios

use cedar_console_agent::{builtin_scenarios, load_scenario_by_id, LoadReport, ScenarioSummary};

use crate::common::{ApiResult, ApiState, ErrorBody, Json, Path, State};

/// List built-in scenarios.
#[utoipa::path(
    get,
    path = "/api/scenarios",
    responses((status = 200, description = "Scenario summaries", body = Vec<ScenarioSummary>)),
    tag = "Scenarios"
)]
pub async fn list_scenarios() -> Json<Vec<ScenarioSummary>> {
    Json(builtin_scenarios().iter().map(|s| s.summary()).collect())
}

/// Load a scenario, replacing all policies, entities and the schema.
#[utoipa::path(
    post,
    path = "/api/scenarios/{id}/load",
    params(("id" = String, Path, description = "Scenario ID")),
    responses(
        (status = 200, description = "Scenario loaded", body = LoadReport),
        (status = 404, description = "Unknown scenario", body = ErrorBody)
    ),
    tag = "Scenarios"
)]
pub async fn post_load_scenario(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> ApiResult<Json<LoadReport>> {
    let report = load_scenario_by_id(state.agent.as_ref(), &id).await?;
    Ok(Json(report))
}
