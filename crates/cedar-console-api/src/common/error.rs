// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// Proxy error type: a status code plus `{"error": "..."}`

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use cedar_console_agent::{AgentError, FormError, ScenarioError};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use utoipa::ToSchema;

/// Error body returned by every proxy route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Upstream error text, or a description of the local failure
    pub error: String,
}

/// API error: HTTP status and message
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status.as_u16(), self.error)
    }
}

impl ApiError {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(resource: impl Into<String>, id: impl Into<String>) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            format!("{} '{}' not found", resource.into(), id.into()),
        )
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::warn!(target: "cedar-console-api", "Request failed with {}: {}", self.status, self.error);
        } else {
            tracing::debug!(target: "cedar-console-api", "Request rejected with {}: {}", self.status, self.error);
        }
        (self.status, Json(ErrorBody { error: self.error })).into_response()
    }
}

/// Upstream statuses are relayed as-is with the agent's raw text; anything
/// that never got an answer from the agent is a 500
impl From<AgentError> for ApiError {
    fn from(err: AgentError) -> Self {
        match err {
            AgentError::Upstream { status, body } => {
                let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                ApiError::new(status, body)
            }
            other => ApiError::internal(other.to_string()),
        }
    }
}

impl From<ScenarioError> for ApiError {
    fn from(err: ScenarioError) -> Self {
        match err {
            ScenarioError::UnknownScenario(id) => ApiError::not_found("Scenario", id),
            ScenarioError::Agent { step, source } => {
                let relayed = ApiError::from(source);
                ApiError::new(relayed.status, format!("Failed to {}: {}", step, relayed.error))
            }
        }
    }
}

impl From<FormError> for ApiError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::Agent(agent) => ApiError::from(agent),
            other => ApiError::bad_request(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}
