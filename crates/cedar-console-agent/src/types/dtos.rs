// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Data Transfer Objects mirroring the Cedar agent's JSON.

Field names and optionality follow the agent's wire format exactly; absent
optional fields are omitted rather than sent as `null`.
*/

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::entity_uid::EntityUid;

// ============================================================================
// POLICY DTOs
// ============================================================================

/// A Cedar policy as stored by the agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Policy {
    pub id: String,
    /// Policy source text
    pub content: String,
}

impl Policy {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}

/// Body of a single-policy update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PolicyUpdate {
    pub content: String,
}

// ============================================================================
// ENTITY DTOs
// ============================================================================

/// An entity in the agent's data store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Entity {
    pub uid: EntityUid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<Object>))]
    pub attrs: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parents: Option<Vec<EntityUid>>,
}

impl Entity {
    /// Entity with empty `attrs` and `parents`, matching the agent's own output
    pub fn new(uid: EntityUid) -> Self {
        Self {
            uid,
            attrs: Some(Map::new()),
            parents: Some(Vec::new()),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attrs.get_or_insert_with(Map::new).insert(key.into(), value);
        self
    }

    pub fn with_parent(mut self, parent: EntityUid) -> Self {
        self.parents.get_or_insert_with(Vec::new).push(parent);
        self
    }
}

// ============================================================================
// AUTHORIZATION DTOs
// ============================================================================

/// Authorization query; entity references use the `Type::"id"` text form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AuthorizationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<Object>))]
    pub context: Option<Map<String, Value>>,
    /// Replaces the stored entities for this query only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<Entity>>,
    /// Added to the stored entities for this query only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_entities: Option<Vec<Entity>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    pub fn is_allow(self) -> bool {
        matches!(self, Decision::Allow)
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Allow => f.write_str("Allow"),
            Decision::Deny => f.write_str("Deny"),
        }
    }
}

/// Policies that determined the decision, plus evaluation errors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Diagnostics {
    #[serde(default)]
    pub reason: Vec<String>,
    #[serde(default)]
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AuthorizationResponse {
    pub decision: Decision,
    #[serde(default)]
    pub diagnostics: Diagnostics,
}

// ============================================================================
// AGENT STATUS DTOs
// ============================================================================

/// Error body returned by the agent on failures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    pub reason: String,
    pub description: String,
    pub code: u16,
}

/// Reachability of the agent
///
/// Serialized as `{"status":"connected","message":...}` or
/// `{"status":"disconnected","error":...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum HealthStatus {
    Connected { message: String },
    Disconnected { error: String },
}

impl HealthStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, HealthStatus::Connected { .. })
    }
}
