// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Agent client error types.

Transport-agnostic: adapters map `Upstream` to the relayed HTTP status and
everything else to an internal error.
*/

use thiserror::Error;

use super::dtos::ErrorResponse;

/// Errors from talking to the Cedar agent
#[derive(Error, Debug, Clone)]
pub enum AgentError {
    /// Agent answered with a non-2xx status
    #[error("Cedar agent returned {status}: {body}")]
    Upstream { status: u16, body: String },

    /// Request never produced a response (connect refused, timeout, ...)
    #[error("Failed to reach Cedar agent: {0}")]
    Transport(String),

    /// Response body was not the expected JSON
    #[error("Invalid response from Cedar agent: {0}")]
    Decode(String),

    /// Base URL or path could not be turned into a request URL
    #[error("Invalid agent URL: {0}")]
    InvalidUrl(String),
}

/// Result type for agent operations
pub type AgentResult<T> = Result<T, AgentError>;

impl AgentError {
    /// Upstream HTTP status, if the agent answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            AgentError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// The agent's structured error body, when the upstream text is one
    pub fn error_response(&self) -> Option<ErrorResponse> {
        match self {
            AgentError::Upstream { body, .. } => serde_json::from_str(body).ok(),
            _ => None,
        }
    }

    /// Text suitable for an operator: the agent's `description` when present,
    /// otherwise the raw upstream body or the error itself
    pub fn detail(&self) -> String {
        match self {
            AgentError::Upstream { body, .. } => match self.error_response() {
                Some(err) if !err.description.is_empty() => err.description,
                _ => body.clone(),
            },
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for AgentError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AgentError::Decode(err.to_string())
        } else {
            AgentError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AgentError {
    fn from(err: serde_json::Error) -> Self {
        AgentError::Decode(err.to_string())
    }
}

impl From<url::ParseError> for AgentError {
    fn from(err: url::ParseError) -> Self {
        AgentError::InvalidUrl(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_prefers_agent_description() {
        let err = AgentError::Upstream {
            status: 400,
            body: r#"{"reason":"Bad Request","description":"policy parse error","code":400}"#.to_string(),
        };
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.detail(), "policy parse error");
        assert_eq!(err.error_response().unwrap().code, 400);
    }

    #[test]
    fn test_detail_falls_back_to_raw_body() {
        let err = AgentError::Upstream {
            status: 502,
            body: "gateway down".to_string(),
        };
        assert!(err.error_response().is_none());
        assert_eq!(err.detail(), "gateway down");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_transport_has_no_status() {
        let err = AgentError::Transport("connection refused".to_string());
        assert_eq!(err.status(), None);
        assert_eq!(err.detail(), "Failed to reach Cedar agent: connection refused");
    }
}
