// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Authorization tester form.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::FormError;
use crate::traits::CedarAgent;
use crate::types::{AuthorizationRequest, AuthorizationResponse, EntityUid};

/// Text fields of the "test authorization" form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizeForm {
    pub principal: String,
    pub action: String,
    pub resource: String,
    /// JSON object text
    pub context: String,
}

impl Default for AuthorizeForm {
    fn default() -> Self {
        Self {
            principal: r#"User::"alice""#.to_string(),
            action: r#"Action::"view""#.to_string(),
            resource: r#"Document::"doc1""#.to_string(),
            context: "{}".to_string(),
        }
    }
}

/// Field text unchanged, or `None` when it is only whitespace
fn non_blank(field: &str) -> Option<String> {
    (!field.trim().is_empty()).then(|| field.to_string())
}

impl AuthorizeForm {
    /// Build the agent request
    ///
    /// Blank principal/action/resource are left out of the request, the rest
    /// are sent exactly as typed; a blank context is sent as `{}`.
    pub fn to_request(&self) -> Result<AuthorizationRequest, FormError> {
        let context = if self.context.trim().is_empty() {
            Map::new()
        } else {
            match serde_json::from_str::<Value>(&self.context) {
                Ok(Value::Object(map)) => map,
                Ok(_) => return Err(FormError::ContextNotObject),
                Err(_) => return Err(FormError::InvalidContext),
            }
        };

        Ok(AuthorizationRequest {
            principal: non_blank(&self.principal),
            action: non_blank(&self.action),
            resource: non_blank(&self.resource),
            context: Some(context),
            entities: None,
            additional_entities: None,
        })
    }

    /// Fields whose text is not a `Type::"id"` literal, with the parse error
    ///
    /// Advisory only: the agent is the authority and gets the text as typed.
    pub fn reference_warnings(&self) -> Vec<String> {
        [
            ("principal", &self.principal),
            ("action", &self.action),
            ("resource", &self.resource),
        ]
        .into_iter()
        .filter(|(_, text)| !text.trim().is_empty())
        .filter_map(|(field, text)| {
            text.parse::<EntityUid>()
                .err()
                .map(|e| format!("{}: {}", field, e))
        })
        .collect()
    }

    pub async fn submit(&self, agent: &dyn CedarAgent) -> Result<AuthorizationResponse, FormError> {
        let request = self.to_request()?;
        Ok(agent.is_authorized(&request).await?)
    }
}
