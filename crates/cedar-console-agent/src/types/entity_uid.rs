// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Entity identifiers in their JSON form (`{"type": ..., "id": ...}`).
//!
//! The Cedar literal form (`Type::"id"`) is read with `cedar-policy`, so
//! escapes and namespaces follow the language exactly.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Typed entity identifier, e.g. `User::"alice"` or `Acme::Doc::"q3"`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EntityUid {
    #[serde(rename = "type")]
    pub entity_type: String,
    pub id: String,
}

/// Text that is not a Cedar entity reference
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a Cedar entity reference ({0})")]
pub struct EntityUidParseError(pub String);

impl EntityUid {
    pub fn new(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    /// `Action::"name"` shorthand
    pub fn action(name: impl Into<String>) -> Self {
        Self::new("Action", name)
    }
}

impl From<&cedar_policy::EntityUid> for EntityUid {
    fn from(uid: &cedar_policy::EntityUid) -> Self {
        let id: &str = uid.id().as_ref();
        Self::new(uid.type_name().to_string(), id)
    }
}

impl FromStr for EntityUid {
    type Err = EntityUidParseError;

    /// Parse the normalized `Type::"id"` form; surrounding whitespace is ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        cedar_policy::EntityUid::from_str(s.trim())
            .map(|uid| EntityUid::from(&uid))
            .map_err(|e| EntityUidParseError(e.to_string()))
    }
}
