// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};

use cedar_console_agent::{CedarAgent, HttpCedarAgent};
use cedar_console_api::{run_http_server, ApiState};
use cedar_console_cli::{load_console_config, log_settings, run_command, split_debug_args, Cli, Command};
use cedar_console_config::{validate_config, ConsoleConfig, RunMode};
use cedar_console_observability::{init_logging, DEBUG_ENV};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<ExitCode> {
    let (args, mut debug_flags) = split_debug_args(std::env::args());
    if let Ok(value) = std::env::var(DEBUG_ENV) {
        debug_flags.merge_env_value(&value);
    }
    let cli = Cli::parse_from(args);

    let config = load_console_config(&cli)?;
    validate_config(&config).context("Invalid configuration")?;

    let _log_guard = init_logging(&debug_flags, &log_settings(&config, &cli))?;

    let agent = HttpCedarAgent::from_config(&config.agent)
        .with_context(|| format!("Cannot use agent URL '{}'", config.agent.url))?;

    match &cli.command {
        Command::Serve(_) => {
            serve(agent, &config).await?;
            Ok(ExitCode::SUCCESS)
        }
        command => {
            let output = run_command(&agent, command).await?;
            println!("{}", serde_json::to_string_pretty(&output.value)?);
            Ok(if output.success { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
    }
}

async fn serve(agent: HttpCedarAgent, config: &ConsoleConfig) -> Result<()> {
    print_banner();

    info!(target: "cedar-console-cli", "Mode: {}", config.environment.mode);
    info!(target: "cedar-console-cli", "Cedar agent: {}", agent.base_url());
    info!(
        target: "cedar-console-cli",
        "Swagger UI: http://{}/api/docs/",
        config.server.bind_address()
    );
    if config.server.cors_allow_any && config.environment.mode == RunMode::Production {
        warn!(target: "cedar-console-cli", "CORS allows any origin in production mode");
    }

    let health = agent.health().await;
    if !health.is_connected() {
        warn!(
            target: "cedar-console-cli",
            "Cedar agent is not reachable yet; requests will fail until it is up"
        );
    }

    run_http_server(ApiState::new(Arc::new(agent)), &config.server)
        .await
        .context("HTTP server failed")?;

    info!(target: "cedar-console-cli", "Shutdown complete");
    Ok(())
}

fn print_banner() {
    eprintln!("╔═══════════════════════════════════════════════════════════╗");
    eprintln!("║                  Cedar Console v{:<26}║", env!("CARGO_PKG_VERSION"));
    eprintln!("║      Management proxy for a Cedar authorization agent     ║");
    eprintln!("╚═══════════════════════════════════════════════════════════╝");
    eprintln!();
}
