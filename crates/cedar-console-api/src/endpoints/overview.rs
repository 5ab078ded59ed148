// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Dashboard overview

use cedar_console_agent::console::{gather_overview, Overview};

use crate::common::{ApiState, Json, State};

/// Policy and entity counts with agent health.
#[utoipa::path(
    get,
    path = "/api/overview",
    responses((status = 200, description = "Overview", body = Overview)),
    tag = "Health"
)]
pub async fn get_overview(State(state): State<ApiState>) -> Json<Overview> {
    Json(gather_overview(state.agent.as_ref()).await)
}
