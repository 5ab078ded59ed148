// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// OpenAPI documentation generation
//
// Generated at compile time with utoipa so the docs follow the handlers.

use utoipa::OpenApi;

use crate::common::ErrorBody;
use cedar_console_agent::console::Overview;
use cedar_console_agent::{
    AuthorizationRequest, AuthorizationResponse, Decision, Diagnostics, Entity, EntityUid,
    HealthStatus, LoadReport, Policy, PolicyUpdate, ScenarioSummary,
};

/// Where Swagger UI is served
pub const SWAGGER_UI_PATH: &str = "/api/docs";

/// Where the OpenAPI document is served
pub const OPENAPI_JSON_PATH: &str = "/api/openapi.json";

/// OpenAPI documentation for the Cedar Console proxy
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cedar Authorization API",
        version = "1.0.0",
        description = "API for managing Cedar policies, entities, and authorization checks",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0"
        )
    ),
    paths(
        crate::endpoints::health::get_health,
        crate::endpoints::overview::get_overview,
        crate::endpoints::policies::list_policies,
        crate::endpoints::policies::create_policy,
        crate::endpoints::policies::replace_policies,
        crate::endpoints::policies::get_policy,
        crate::endpoints::policies::update_policy,
        crate::endpoints::policies::delete_policy,
        crate::endpoints::data::list_entities,
        crate::endpoints::data::replace_entities,
        crate::endpoints::data::delete_entities,
        crate::endpoints::schema::get_schema,
        crate::endpoints::schema::replace_schema,
        crate::endpoints::schema::delete_schema,
        crate::endpoints::authorize::post_authorize,
        crate::endpoints::scenarios::list_scenarios,
        crate::endpoints::scenarios::post_load_scenario,
    ),
    components(
        schemas(
            Policy,
            PolicyUpdate,
            Entity,
            EntityUid,
            AuthorizationRequest,
            AuthorizationResponse,
            Decision,
            Diagnostics,
            HealthStatus,
            ScenarioSummary,
            LoadReport,
            Overview,
            ErrorBody,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Policies", description = "Policy management"),
        (name = "Entities", description = "Entity/data management"),
        (name = "Schema", description = "Schema management"),
        (name = "Authorization", description = "Authorization checks"),
        (name = "Scenarios", description = "Built-in demo scenarios"),
    )
)]
pub struct ApiDoc;

/// Get OpenAPI JSON specification
pub fn get_openapi_json() -> String {
    ApiDoc::openapi().to_pretty_json().unwrap_or_else(|e| {
        format!(r#"{{"error": "Failed to generate OpenAPI spec: {}"}}"#, e)
    })
}
