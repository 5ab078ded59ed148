// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Operator commands executed against a Cedar agent

use anyhow::{anyhow, bail, Context, Result};
use serde::Serialize;
use serde_json::{json, Value};
use std::fmt::Display;
use std::path::Path;
use tracing::{info, warn};

use cedar_console_agent::console::{
    gather_overview, parse_entities_json, parse_schema_json, sample_entities, sample_schema, AuthorizeForm,
    FormError, PolicyForm,
};
use cedar_console_agent::{builtin_scenarios, load_scenario_by_id, AgentError, CedarAgent, Policy, ScenarioSummary};
use cedar_console_api::openapi::get_openapi_json;

use crate::cli::{AuthorizeArgs, Command, DocumentSource, EntityCommand, PolicyCommand, PolicySource, ScenarioCommand, SchemaCommand};

/// Result of an operator command
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    /// Printed as pretty JSON on stdout
    pub value: Value,
    /// Drives the exit status
    pub success: bool,
}

impl CommandOutput {
    fn ok(value: impl Serialize) -> Result<Self> {
        Ok(Self {
            value: serde_json::to_value(value)?,
            success: true,
        })
    }
}

/// Run one operator command
///
/// Agent failures are returned as errors. A disconnected agent during
/// `health` is not an error, but the output is marked unsuccessful.
pub async fn run_command(agent: &dyn CedarAgent, command: &Command) -> Result<CommandOutput> {
    match command {
        Command::Serve(_) => bail!("'serve' runs the HTTP server and is not an operator command"),
        Command::Health => {
            let health = agent.health().await;
            Ok(CommandOutput {
                success: health.is_connected(),
                value: serde_json::to_value(&health)?,
            })
        }
        Command::Overview => CommandOutput::ok(gather_overview(agent).await),
        Command::Policies(cmd) => run_policy_command(agent, cmd).await,
        Command::Entities(cmd) => run_entity_command(agent, cmd).await,
        Command::Schema(cmd) => run_schema_command(agent, cmd).await,
        Command::Authorize(args) => run_authorize(agent, args).await,
        Command::Scenarios(cmd) => run_scenario_command(agent, cmd).await,
        Command::Openapi => {
            let document: Value = serde_json::from_str(&get_openapi_json()).context("OpenAPI document is not JSON")?;
            CommandOutput::ok(document)
        }
    }
}

async fn run_policy_command(agent: &dyn CedarAgent, command: &PolicyCommand) -> Result<CommandOutput> {
    match command {
        PolicyCommand::List => CommandOutput::ok(
            agent
                .list_policies()
                .await
                .map_err(agent_failure("Failed to list policies"))?,
        ),
        PolicyCommand::Get { id } => CommandOutput::ok(
            agent
                .get_policy(id)
                .await
                .map_err(agent_failure(format!("Failed to fetch policy '{}'", id)))?,
        ),
        PolicyCommand::Create { id, source } => {
            let mut form = PolicyForm::create();
            form.id = id.clone();
            if let Some(content) = read_policy_source(source)? {
                form.content = content;
            }
            let created = form
                .submit(agent)
                .await
                .map_err(form_failure("Failed to create policy"))?;
            info!(target: "cedar-console-cli", "Created policy '{}'", created.id);
            CommandOutput::ok(created)
        }
        PolicyCommand::Update { id, source } => {
            let content = read_policy_source(source)?.context("policy update needs --file or --content")?;
            let mut form = PolicyForm::edit(&Policy::new(id.clone(), String::new()));
            form.content = content;
            let updated = form
                .submit(agent)
                .await
                .map_err(form_failure(format!("Failed to update policy '{}'", id)))?;
            CommandOutput::ok(updated)
        }
        PolicyCommand::Delete { id } => {
            agent
                .delete_policy(id)
                .await
                .map_err(agent_failure(format!("Failed to delete policy '{}'", id)))?;
            CommandOutput::ok(json!({ "deleted": id }))
        }
    }
}

async fn run_entity_command(agent: &dyn CedarAgent, command: &EntityCommand) -> Result<CommandOutput> {
    match command {
        EntityCommand::List => CommandOutput::ok(
            agent
                .list_entities()
                .await
                .map_err(agent_failure("Failed to list entities"))?,
        ),
        EntityCommand::Put(source) => {
            let entities = match read_document(source)? {
                Some(text) => parse_entities_json(&text)?,
                None => sample_entities(),
            };
            CommandOutput::ok(
                agent
                    .replace_entities(&entities)
                    .await
                    .map_err(agent_failure("Failed to replace entities"))?,
            )
        }
        EntityCommand::Clear => {
            agent
                .delete_entities()
                .await
                .map_err(agent_failure("Failed to delete entities"))?;
            CommandOutput::ok(json!({ "cleared": "entities" }))
        }
    }
}

async fn run_schema_command(agent: &dyn CedarAgent, command: &SchemaCommand) -> Result<CommandOutput> {
    match command {
        SchemaCommand::Get => CommandOutput::ok(
            agent
                .get_schema()
                .await
                .map_err(agent_failure("Failed to fetch schema"))?,
        ),
        SchemaCommand::Put(source) => {
            let schema = match read_document(source)? {
                Some(text) => parse_schema_json(&text)?,
                None => sample_schema(),
            };
            CommandOutput::ok(
                agent
                    .replace_schema(&schema)
                    .await
                    .map_err(agent_failure("Failed to replace schema"))?,
            )
        }
        SchemaCommand::Delete => {
            agent
                .delete_schema()
                .await
                .map_err(agent_failure("Failed to delete schema"))?;
            CommandOutput::ok(json!({ "cleared": "schema" }))
        }
    }
}

async fn run_authorize(agent: &dyn CedarAgent, args: &AuthorizeArgs) -> Result<CommandOutput> {
    let form = authorize_form(args);
    for warning in form.reference_warnings() {
        warn!(target: "cedar-console-cli", "{}", warning);
    }
    let response = form
        .submit(agent)
        .await
        .map_err(form_failure("Authorization request failed"))?;
    info!(target: "cedar-console-cli", "Decision: {}", response.decision);
    CommandOutput::ok(response)
}

/// Tester defaults with any provided fields applied
pub fn authorize_form(args: &AuthorizeArgs) -> AuthorizeForm {
    let mut form = AuthorizeForm::default();
    if let Some(principal) = &args.principal {
        form.principal = principal.clone();
    }
    if let Some(action) = &args.action {
        form.action = action.clone();
    }
    if let Some(resource) = &args.resource {
        form.resource = resource.clone();
    }
    if let Some(context) = &args.context {
        form.context = context.clone();
    }
    form
}

async fn run_scenario_command(agent: &dyn CedarAgent, command: &ScenarioCommand) -> Result<CommandOutput> {
    match command {
        ScenarioCommand::List => {
            let summaries: Vec<ScenarioSummary> = builtin_scenarios().iter().map(|s| s.summary()).collect();
            CommandOutput::ok(summaries)
        }
        ScenarioCommand::Load { id } => {
            let report = load_scenario_by_id(agent, id).await?;
            if !report.failed_deletes.is_empty() {
                warn!(
                    target: "cedar-console-cli",
                    "Could not delete {} existing policies: {}",
                    report.failed_deletes.len(),
                    report.failed_deletes.join(", ")
                );
            }
            CommandOutput::ok(report)
        }
    }
}

/// Context plus the agent's own description of what went wrong
fn agent_failure(context: impl Display) -> impl FnOnce(AgentError) -> anyhow::Error {
    move |err| anyhow!("{}: {}", context, err.detail())
}

fn form_failure(context: impl Display) -> impl FnOnce(FormError) -> anyhow::Error {
    move |err| anyhow!("{}: {}", context, err.detail())
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn read_policy_source(source: &PolicySource) -> Result<Option<String>> {
    match (&source.file, &source.content) {
        (Some(path), _) => read_file(path).map(Some),
        (None, Some(content)) => Ok(Some(content.clone())),
        (None, None) => Ok(None),
    }
}

/// File contents, or `None` for the built-in sample
fn read_document(source: &DocumentSource) -> Result<Option<String>> {
    match &source.file {
        Some(path) => read_file(path).map(Some),
        None if source.sample => Ok(None),
        None => bail!("either --file or --sample is required"),
    }
}
