// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Built-in demo scenarios and the clean-slate loader.

Loading a scenario wipes the agent (policies, entities, schema) and installs
the scenario's schema, entities and policies, in that order.
*/

mod fixtures;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::traits::CedarAgent;
use crate::types::*;

/// A self-contained demo: schema, entities and policies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub name: String,
    pub description: String,
    pub schema: Schema,
    pub policies: Vec<Policy>,
    pub entities: Vec<Entity>,
}

/// Listing form of a scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ScenarioSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub policy_count: usize,
    pub entity_count: usize,
}

impl Scenario {
    pub fn summary(&self) -> ScenarioSummary {
        ScenarioSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            policy_count: self.policies.len(),
            entity_count: self.entities.len(),
        }
    }
}

/// All built-in scenarios, in display order
pub fn builtin_scenarios() -> Vec<Scenario> {
    vec![fixtures::rbac(), fixtures::abac(), fixtures::doc_share()]
}

pub fn find_scenario(id: &str) -> Option<Scenario> {
    builtin_scenarios().into_iter().find(|s| s.id == id)
}

/// Stage of a scenario load, for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStep {
    ListPolicies,
    DeleteEntities,
    DeleteSchema,
    PutSchema,
    PutEntities,
    PutPolicies,
}

impl std::fmt::Display for LoadStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            LoadStep::ListPolicies => "list existing policies",
            LoadStep::DeleteEntities => "delete entities",
            LoadStep::DeleteSchema => "delete schema",
            LoadStep::PutSchema => "load schema",
            LoadStep::PutEntities => "load entities",
            LoadStep::PutPolicies => "load policies",
        };
        f.write_str(text)
    }
}

#[derive(Error, Debug, Clone)]
pub enum ScenarioError {
    #[error("Unknown scenario '{0}'")]
    UnknownScenario(String),

    #[error("Failed to {step}: {source}")]
    Agent {
        step: LoadStep,
        #[source]
        source: AgentError,
    },
}

impl ScenarioError {
    fn at(step: LoadStep) -> impl FnOnce(AgentError) -> ScenarioError {
        move |source| ScenarioError::Agent { step, source }
    }
}

/// Outcome of a successful load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LoadReport {
    pub scenario_id: String,
    pub policies_removed: usize,
    /// Existing policies whose delete failed; the replace-all still supersedes them
    pub failed_deletes: Vec<String>,
    pub policies_loaded: usize,
    pub entities_loaded: usize,
}

/// Wipe the agent and install `scenario`
///
/// Individual policy delete failures are logged and skipped. Any other failure
/// stops the load at that step and is returned.
pub async fn load_scenario(agent: &dyn CedarAgent, scenario: &Scenario) -> Result<LoadReport, ScenarioError> {
    info!(target: "cedar-console-agent", "Loading scenario '{}'", scenario.id);

    let existing = agent
        .list_policies()
        .await
        .map_err(ScenarioError::at(LoadStep::ListPolicies))?;

    let mut report = LoadReport {
        scenario_id: scenario.id.clone(),
        ..Default::default()
    };
    // One at a time, in listed order
    for policy in &existing {
        match agent.delete_policy(&policy.id).await {
            Ok(()) => report.policies_removed += 1,
            Err(e) => {
                warn!(target: "cedar-console-agent", "Failed to delete policy {}: {}", policy.id, e);
                report.failed_deletes.push(policy.id.clone());
            }
        }
    }

    agent
        .delete_entities()
        .await
        .map_err(ScenarioError::at(LoadStep::DeleteEntities))?;
    agent
        .delete_schema()
        .await
        .map_err(ScenarioError::at(LoadStep::DeleteSchema))?;

    agent
        .replace_schema(&scenario.schema)
        .await
        .map_err(ScenarioError::at(LoadStep::PutSchema))?;
    let entities = agent
        .replace_entities(&scenario.entities)
        .await
        .map_err(ScenarioError::at(LoadStep::PutEntities))?;
    let policies = agent
        .replace_policies(&scenario.policies)
        .await
        .map_err(ScenarioError::at(LoadStep::PutPolicies))?;

    report.entities_loaded = entities.len();
    report.policies_loaded = policies.len();

    info!(
        target: "cedar-console-agent",
        "Scenario '{}' loaded: {} policies, {} entities ({} old policies removed)",
        scenario.id, report.policies_loaded, report.entities_loaded, report.policies_removed
    );
    Ok(report)
}

/// [`load_scenario`] by built-in scenario id
pub async fn load_scenario_by_id(agent: &dyn CedarAgent, id: &str) -> Result<LoadReport, ScenarioError> {
    let scenario = find_scenario(id).ok_or_else(|| ScenarioError::UnknownScenario(id.to_string()))?;
    load_scenario(agent, &scenario).await
}
