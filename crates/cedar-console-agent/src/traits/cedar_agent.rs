// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Cedar agent client trait.

The stable boundary between the console (proxy routes, CLI, scenario loader)
and whatever actually talks to the agent.
*/

use crate::types::*;
use async_trait::async_trait;

/// Operations the console performs against a Cedar agent
#[async_trait]
pub trait CedarAgent: Send + Sync {
    /// Probe the agent root
    ///
    /// Never fails: an unreachable agent is reported as
    /// `HealthStatus::Disconnected`.
    async fn health(&self) -> HealthStatus;

    // ------------------------------------------------------------------
    // Policies
    // ------------------------------------------------------------------

    async fn list_policies(&self) -> AgentResult<Vec<Policy>>;

    /// # Errors
    /// * `AgentError::Upstream` with status 404 - no policy with that id
    async fn get_policy(&self, id: &str) -> AgentResult<Policy>;

    async fn create_policy(&self, policy: &Policy) -> AgentResult<Policy>;

    async fn update_policy(&self, id: &str, update: &PolicyUpdate) -> AgentResult<Policy>;

    /// Replace the whole policy set
    async fn replace_policies(&self, policies: &[Policy]) -> AgentResult<Vec<Policy>>;

    async fn delete_policy(&self, id: &str) -> AgentResult<()>;

    // ------------------------------------------------------------------
    // Entities
    // ------------------------------------------------------------------

    async fn list_entities(&self) -> AgentResult<Vec<Entity>>;

    /// Replace the whole entity store
    async fn replace_entities(&self, entities: &[Entity]) -> AgentResult<Vec<Entity>>;

    async fn delete_entities(&self) -> AgentResult<()>;

    // ------------------------------------------------------------------
    // Schema
    // ------------------------------------------------------------------

    /// Current schema, or `None` when the agent has none (upstream 404)
    async fn get_schema(&self) -> AgentResult<Option<Schema>>;

    async fn replace_schema(&self, schema: &Schema) -> AgentResult<Schema>;

    async fn delete_schema(&self) -> AgentResult<()>;

    // ------------------------------------------------------------------
    // Authorization
    // ------------------------------------------------------------------

    async fn is_authorized(&self, request: &AuthorizationRequest) -> AgentResult<AuthorizationResponse>;
}
