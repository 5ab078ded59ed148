// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Built-in scenario data: schema, entities and policies for each demo.

use serde_json::{json, Value};

use super::Scenario;
use crate::types::{Entity, EntityUid, Policy};

const RBAC_POLICY: &str = r#"
// Viewers can view documents
permit(
    principal in Role::"viewer",
    action == Action::"view",
    resource
);

// Editors can also edit documents (inherits view from viewer)
permit(
    principal in Role::"editor",
    action == Action::"edit",
    resource
);

// Admins can do everything (inherits edit from editor)
permit(
    principal in Role::"admin",
    action,
    resource
);"#;

const ABAC_DEPARTMENT_POLICY: &str = r#"
// Users can only read documents in their own department
permit(
    principal,
    action == Action::"read",
    resource
)
when {
    principal.department == resource.department
};"#;

const ABAC_CLEARANCE_POLICY: &str = r#"
// Users must have sufficient clearance
permit(
    principal,
    action == Action::"read",
    resource
)
when {
    principal.clearance_level >= resource.classification_level
};"#;

const DOC_SHARE_OWNER_POLICY: &str = r#"
// Owner has full access to their specific document
permit(
    principal == User::"owner",
    action,
    resource == Document::"shared_doc"
);"#;

const DOC_SHARE_COLLABORATOR_POLICY: &str = r#"
// Collaborator can view and edit the specific document
permit(
    principal == User::"collaborator",
    action in [Action::"view", Action::"edit"],
    resource == Document::"shared_doc"
);"#;

/// Entity with an explicit (possibly empty) parent list and no attributes
fn member(entity_type: &str, id: &str, parents: &[(&str, &str)]) -> Entity {
    Entity {
        uid: EntityUid::new(entity_type, id),
        attrs: None,
        parents: Some(parents.iter().map(|(t, i)| EntityUid::new(*t, *i)).collect()),
    }
}

/// Entity with attributes and no parent list
fn attributed(entity_type: &str, id: &str, attrs: &[(&str, Value)]) -> Entity {
    Entity {
        uid: EntityUid::new(entity_type, id),
        attrs: Some(attrs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()),
        parents: None,
    }
}

fn applies_to(principals: &[&str], resources: &[&str]) -> Value {
    json!({
        "appliesTo": {
            "principalTypes": principals,
            "resourceTypes": resources
        }
    })
}

pub(super) fn rbac() -> Scenario {
    let both = ["Role", "User"];
    Scenario {
        id: "rbac".to_string(),
        name: "Role-Based Access Control (RBAC)".to_string(),
        description: "Classic RBAC with Admin, Editor, and Viewer roles. Demonstrates role hierarchies and permission inheritance.".to_string(),
        schema: json!({
            "": {
                "entityTypes": {
                    "User": { "memberOfTypes": ["Role"] },
                    "Role": { "memberOfTypes": ["Role"] },
                    "Document": { "memberOfTypes": [] }
                },
                "actions": {
                    "view": applies_to(&both, &["Document"]),
                    "edit": applies_to(&both, &["Document"]),
                    "delete": applies_to(&both, &["Document"])
                }
            }
        }),
        entities: vec![
            member("Role", "viewer", &[]),
            member("Role", "editor", &[("Role", "viewer")]),
            member("Role", "admin", &[("Role", "editor")]),
            member("User", "alice", &[("Role", "admin")]),
            member("User", "bob", &[("Role", "viewer")]),
            member("Document", "doc1", &[]),
        ],
        policies: vec![Policy::new("role-permissions", RBAC_POLICY)],
    }
}

pub(super) fn abac() -> Scenario {
    Scenario {
        id: "abac".to_string(),
        name: "Attribute-Based Access Control (ABAC)".to_string(),
        description: "Access based on attributes like \"department\" or \"security_level\". Demonstrates conditions and attribute evaluation.".to_string(),
        schema: json!({
            "": {
                "entityTypes": {
                    "User": {
                        "shape": {
                            "type": "Record",
                            "attributes": {
                                "department": { "type": "String" },
                                "clearance_level": { "type": "Long" }
                            }
                        }
                    },
                    "Document": {
                        "shape": {
                            "type": "Record",
                            "attributes": {
                                "owner": { "type": "Entity", "name": "User" },
                                "classification_level": { "type": "Long" },
                                "department": { "type": "String" }
                            }
                        }
                    }
                },
                "actions": {
                    "read": applies_to(&["User"], &["Document"])
                }
            }
        }),
        entities: vec![
            attributed(
                "User",
                "alice",
                &[("department", json!("engineering")), ("clearance_level", json!(3))],
            ),
            attributed(
                "User",
                "bob",
                &[("department", json!("sales")), ("clearance_level", json!(1))],
            ),
            attributed(
                "Document",
                "design_doc",
                &[
                    ("owner", json!({ "type": "User", "id": "alice" })),
                    ("classification_level", json!(2)),
                    ("department", json!("engineering")),
                ],
            ),
        ],
        policies: vec![
            Policy::new("department-match", ABAC_DEPARTMENT_POLICY),
            Policy::new("clearance-level", ABAC_CLEARANCE_POLICY),
        ],
    }
}

pub(super) fn doc_share() -> Scenario {
    Scenario {
        id: "doc-share".to_string(),
        name: "Document Sharing (Google Drive Style)".to_string(),
        description: "Owner, Editor, and Viewer permissions on individual resources. Demonstrates direct resource relationships.".to_string(),
        schema: json!({
            "": {
                "entityTypes": {
                    "User": {},
                    "Document": {}
                },
                "actions": {
                    "view": applies_to(&["User"], &["Document"]),
                    "edit": applies_to(&["User"], &["Document"]),
                    "delete": applies_to(&["User"], &["Document"])
                }
            }
        }),
        entities: vec![
            member("User", "owner", &[]),
            member("User", "collaborator", &[]),
            member("User", "stranger", &[]),
            member("Document", "shared_doc", &[]),
        ],
        policies: vec![
            Policy::new("owner-full-access", DOC_SHARE_OWNER_POLICY),
            Policy::new("collaborator-access", DOC_SHARE_COLLABORATOR_POLICY),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributed_keeps_every_attribute() {
        let entity = attributed("User", "carol", &[("department", json!("legal")), ("tags", json!([]))]);
        let attrs = entity.attrs.unwrap();
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs["department"], "legal");
        assert_eq!(attrs["tags"], json!([]));
        assert!(entity.parents.is_none());

        let bare = attributed("User", "dave", &[]);
        assert_eq!(bare.attrs.map(|a| a.len()), Some(0));
    }

    #[test]
    fn test_abac_attributes_are_all_present() {
        for entity in abac().entities {
            let attrs = entity.attrs.unwrap();
            assert!(attrs.contains_key("department"), "{:?} has no department", entity.uid);
        }
    }
}
