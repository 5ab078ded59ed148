// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Operator-facing state: the authorization tester, the policy form, the JSON
editors for entities and schema, and the overview numbers.

Nothing here renders anything; a front end (the CLI, or any UI talking to the
proxy) drives these types and shows the results.
*/

pub mod authorize;
pub mod editors;
pub mod overview;
pub mod policy_form;

pub use authorize::AuthorizeForm;
pub use editors::{
    entities_editor_text, parse_entities_json, parse_schema_json, sample_entities, sample_schema,
    schema_editor_text,
};
pub use overview::{gather_overview, Overview};
pub use policy_form::{PolicyForm, PolicyFormMode, DEFAULT_POLICY_TEMPLATE};

use thiserror::Error;

use crate::types::AgentError;

/// Errors raised while turning operator input into agent calls
#[derive(Error, Debug, Clone)]
pub enum FormError {
    #[error("Invalid JSON in context field")]
    InvalidContext,

    #[error("Context must be a JSON object")]
    ContextNotObject,

    #[error("Policy ID is required")]
    MissingPolicyId,

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error(transparent)]
    Agent(#[from] AgentError),
}

impl FormError {
    /// Operator text; agent failures use [`AgentError::detail`]
    pub fn detail(&self) -> String {
        match self {
            FormError::Agent(err) => err.detail(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_error_detail() {
        let err = FormError::from(AgentError::Upstream {
            status: 400,
            body: r#"{"reason":"Bad Request","description":"unexpected token","code":400}"#.to_string(),
        });
        assert_eq!(err.detail(), "unexpected token");
        assert_eq!(FormError::MissingPolicyId.detail(), "Policy ID is required");
    }
}
