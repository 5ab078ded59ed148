// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Dashboard overview numbers.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::traits::CedarAgent;
use crate::types::HealthStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Overview {
    pub policy_count: usize,
    pub entity_count: usize,
    pub health: HealthStatus,
}

impl Overview {
    pub fn healthy(&self) -> bool {
        self.health.is_connected()
    }
}

/// Counts and health, fetched concurrently; a failed count reads as zero
pub async fn gather_overview(agent: &dyn CedarAgent) -> Overview {
    let (policies, entities, health) =
        futures::join!(agent.list_policies(), agent.list_entities(), agent.health());

    let policy_count = policies.map(|p| p.len()).unwrap_or_else(|e| {
        debug!(target: "cedar-console-agent", "Policy count unavailable: {}", e);
        0
    });
    let entity_count = entities.map(|e| e.len()).unwrap_or_else(|e| {
        debug!(target: "cedar-console-agent", "Entity count unavailable: {}", e);
        0
    });

    Overview {
        policy_count,
        entity_count,
        health,
    }
}
