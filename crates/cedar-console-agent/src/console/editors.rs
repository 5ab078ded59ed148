// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! JSON editors for the entity store and the schema, and their sample data.

use serde_json::json;

use super::FormError;
use crate::types::{Entity, EntityUid, Schema};

/// Parse entity editor text: a JSON array of entities
pub fn parse_entities_json(text: &str) -> Result<Vec<Entity>, FormError> {
    serde_json::from_str(text).map_err(|e| FormError::InvalidJson(e.to_string()))
}

/// Parse schema editor text: any JSON value
pub fn parse_schema_json(text: &str) -> Result<Schema, FormError> {
    serde_json::from_str(text).map_err(|e| FormError::InvalidJson(e.to_string()))
}

/// Pretty-printed editor text for the current entities
pub fn entities_editor_text(entities: &[Entity]) -> String {
    serde_json::to_string_pretty(entities).unwrap_or_else(|_| "[]".to_string())
}

/// Pretty-printed editor text for the current schema; `{}` when there is none
pub fn schema_editor_text(schema: Option<&Schema>) -> String {
    match schema {
        Some(schema) if !schema.is_null() => {
            serde_json::to_string_pretty(schema).unwrap_or_else(|_| "{}".to_string())
        }
        _ => "{}".to_string(),
    }
}

/// Users, roles, a document and two actions
pub fn sample_entities() -> Vec<Entity> {
    let user = |id: &str, email: &str, role: &str| {
        Entity::new(EntityUid::new("User", id))
            .with_attr("email", json!(email))
            .with_attr("role", json!(role))
            .with_parent(EntityUid::new("Role", role))
    };

    vec![
        user("alice", "alice@example.com", "admin"),
        user("bob", "bob@example.com", "viewer"),
        Entity::new(EntityUid::new("Role", "admin")),
        Entity::new(EntityUid::new("Role", "viewer")),
        Entity::new(EntityUid::new("Document", "doc1"))
            .with_attr("title", json!("Project Plan"))
            .with_attr("owner", json!("alice")),
        Entity::new(EntityUid::action("view")),
        Entity::new(EntityUid::action("edit")),
    ]
}

/// Schema matching [`sample_entities`]
pub fn sample_schema() -> Schema {
    json!({
        "": {
            "entityTypes": {
                "User": {
                    "shape": {
                        "type": "Record",
                        "attributes": {
                            "email": { "type": "String" },
                            "role": { "type": "String" }
                        }
                    },
                    "memberOfTypes": ["Role"]
                },
                "Role": {
                    "shape": {
                        "type": "Record",
                        "attributes": {}
                    }
                },
                "Document": {
                    "shape": {
                        "type": "Record",
                        "attributes": {
                            "title": { "type": "String" },
                            "owner": { "type": "String" }
                        }
                    }
                }
            },
            "actions": {
                "view": {
                    "appliesTo": {
                        "principalTypes": ["User", "Role"],
                        "resourceTypes": ["Document"]
                    }
                },
                "edit": {
                    "appliesTo": {
                        "principalTypes": ["User", "Role"],
                        "resourceTypes": ["Document"]
                    }
                },
                "delete": {
                    "appliesTo": {
                        "principalTypes": ["User"],
                        "resourceTypes": ["Document"]
                    }
                }
            }
        }
    })
}
