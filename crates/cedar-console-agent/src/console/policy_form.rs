// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Create/edit form for a single policy.

use super::FormError;
use crate::traits::CedarAgent;
use crate::types::{Policy, PolicyUpdate};

/// Starting text for a new policy
pub const DEFAULT_POLICY_TEMPLATE: &str = "permit (\n  principal,\n  action,\n  resource\n);";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyFormMode {
    Create,
    /// Editing an existing policy; its id is fixed
    Edit { policy_id: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyForm {
    mode: PolicyFormMode,
    pub id: String,
    pub content: String,
}

impl PolicyForm {
    /// Blank id, template content
    pub fn create() -> Self {
        Self {
            mode: PolicyFormMode::Create,
            id: String::new(),
            content: DEFAULT_POLICY_TEMPLATE.to_string(),
        }
    }

    pub fn edit(policy: &Policy) -> Self {
        Self {
            mode: PolicyFormMode::Edit {
                policy_id: policy.id.clone(),
            },
            id: policy.id.clone(),
            content: policy.content.clone(),
        }
    }

    pub fn mode(&self) -> &PolicyFormMode {
        &self.mode
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, PolicyFormMode::Edit { .. })
    }

    /// Create or update the policy on the agent
    ///
    /// In edit mode the original id is used, whatever `id` now holds.
    pub async fn submit(&self, agent: &dyn CedarAgent) -> Result<Policy, FormError> {
        match &self.mode {
            PolicyFormMode::Create => {
                let id = self.id.trim();
                if id.is_empty() {
                    return Err(FormError::MissingPolicyId);
                }
                Ok(agent.create_policy(&Policy::new(id, self.content.clone())).await?)
            }
            PolicyFormMode::Edit { policy_id } => {
                let update = PolicyUpdate {
                    content: self.content.clone(),
                };
                Ok(agent.update_policy(policy_id, &update).await?)
            }
        }
    }
}

impl Default for PolicyForm {
    fn default() -> Self {
        Self::create()
    }
}
