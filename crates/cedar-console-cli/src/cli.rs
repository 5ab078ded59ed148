// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Command-line definition

use clap::{Args, Parser, Subcommand};
use std::collections::HashMap;
use std::path::PathBuf;

use cedar_console_observability::debug_flags_help;

/// Cedar Console - management proxy and operator tool for a Cedar agent
#[derive(Parser, Debug)]
#[command(name = "cedar-console", version, author, long_about = None, after_help = debug_flags_help())]
pub struct Cli {
    /// Path to cedar_console.toml (discovered from the working directory when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the Cedar agent, e.g. http://localhost:8180
    #[arg(long, global = true)]
    pub agent_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP proxy with Swagger UI
    Serve(ServeArgs),

    /// Check whether the agent is reachable
    Health,

    /// Policy count, entity count and agent health
    Overview,

    /// Manage policies
    #[command(subcommand)]
    Policies(PolicyCommand),

    /// Manage the entity store
    #[command(subcommand)]
    Entities(EntityCommand),

    /// Manage the schema
    #[command(subcommand)]
    Schema(SchemaCommand),

    /// Ask the agent for an authorization decision
    Authorize(AuthorizeArgs),

    /// List or load the built-in demo scenarios
    #[command(subcommand)]
    Scenarios(ScenarioCommand),

    /// Print the proxy's OpenAPI document
    Openapi,
}

impl Command {
    pub fn is_serve(&self) -> bool {
        matches!(self, Command::Serve(_))
    }
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ServeArgs {
    /// Bind host (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port (overrides server.port)
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum PolicyCommand {
    List,
    Get {
        id: String,
    },
    /// Create a policy; content defaults to a permit-all template
    Create {
        #[arg(long)]
        id: String,
        #[command(flatten)]
        source: PolicySource,
    },
    /// Replace the content of an existing policy
    Update {
        id: String,
        #[command(flatten)]
        source: PolicySource,
    },
    Delete {
        id: String,
    },
}

/// Where policy text comes from
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicySource {
    /// Read Cedar policy text from a file
    #[arg(long, conflicts_with = "content")]
    pub file: Option<PathBuf>,

    /// Inline Cedar policy text
    #[arg(long)]
    pub content: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum EntityCommand {
    List,
    /// Replace all entities with a JSON array
    Put(DocumentSource),
    /// Remove every entity
    Clear,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum SchemaCommand {
    /// Print the schema (null when none is set)
    Get,
    /// Replace the schema with a JSON document
    Put(DocumentSource),
    Delete,
}

/// A JSON document from a file, or the built-in sample
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSource {
    /// JSON file to upload
    #[arg(long, conflicts_with = "sample", required_unless_present = "sample")]
    pub file: Option<PathBuf>,

    /// Upload the built-in sample document
    #[arg(long, default_value_t = false)]
    pub sample: bool,
}

/// Request fields; omitted ones fall back to the tester defaults
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorizeArgs {
    /// Principal, e.g. User::"alice" (empty to omit)
    #[arg(long)]
    pub principal: Option<String>,

    /// Action, e.g. Action::"view" (empty to omit)
    #[arg(long)]
    pub action: Option<String>,

    /// Resource, e.g. Document::"doc1" (empty to omit)
    #[arg(long)]
    pub resource: Option<String>,

    /// Context as a JSON object
    #[arg(long)]
    pub context: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ScenarioCommand {
    List,
    /// Wipe the agent and install a scenario
    Load {
        id: String,
    },
}

impl Cli {
    /// Overrides handed to the config loader, keyed as it expects
    pub fn config_overrides(&self) -> HashMap<String, String> {
        let mut overrides = HashMap::new();
        if let Some(url) = &self.agent_url {
            overrides.insert("agent_url".to_string(), url.clone());
        }
        if let Command::Serve(serve) = &self.command {
            if let Some(host) = &serve.host {
                overrides.insert("host".to_string(), host.clone());
            }
            if let Some(port) = serve.port {
                overrides.insert("port".to_string(), port.to_string());
            }
        }
        if self.verbose {
            overrides.insert("log_level".to_string(), "debug".to_string());
        }
        overrides
    }
}
