// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Cedar Console command-line front end
//!
//! `cedar-console serve` runs the HTTP proxy; every other subcommand talks
//! to the agent directly and prints JSON on stdout.

pub mod cli;
pub mod commands;

pub use cli::*;
pub use commands::{authorize_form, run_command, CommandOutput};

use anyhow::{Context, Result};
use cedar_console_config::{load_config, ConsoleConfig};
use cedar_console_observability::{CrateDebugFlags, LogFormat, LogSettings};

/// Separate `--debug-*` flags from the arguments clap should see
///
/// Arguments after a bare `--` are passed through untouched.
pub fn split_debug_args<I>(args: I) -> (Vec<String>, CrateDebugFlags)
where
    I: IntoIterator<Item = String>,
{
    let mut remaining = Vec::new();
    let mut debug_args = Vec::new();
    let mut passthrough = false;

    for arg in args {
        if !passthrough && arg == "--" {
            passthrough = true;
        }
        if !passthrough && arg.starts_with("--debug-") {
            debug_args.push(arg);
        } else {
            remaining.push(arg);
        }
    }

    (remaining, CrateDebugFlags::from_args(debug_args))
}

/// Load configuration with the command line's overrides applied
pub fn load_console_config(cli: &Cli) -> Result<ConsoleConfig> {
    let overrides = cli.config_overrides();
    load_config(cli.config.as_deref(), Some(&overrides)).context("Failed to load configuration")
}

/// Logging settings for the selected command
///
/// `serve` uses the configured level. Operator commands stay at `warn`
/// unless `--verbose` is given, so their stdout is only the JSON result.
pub fn log_settings(config: &ConsoleConfig, cli: &Cli) -> LogSettings {
    let level = if cli.command.is_serve() || cli.verbose {
        config.logging.level.clone()
    } else {
        "warn".to_string()
    };
    let format = if config.logging.json { LogFormat::Json } else { LogFormat::Text };

    LogSettings::default()
        .with_level(level)
        .with_format(format)
        .with_log_dir(if cli.command.is_serve() { config.logging.log_dir.clone() } else { None })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_split_debug_args() {
        let (rest, flags) = split_debug_args(args(&[
            "cedar-console",
            "--debug-cedar-console-agent",
            "policies",
            "list",
            "--debug-all",
        ]));
        assert_eq!(rest, args(&["cedar-console", "policies", "list"]));
        assert!(flags.is_enabled("cedar-console-agent"));
        assert!(flags.is_enabled("cedar-console-api"));
    }

    #[test]
    fn test_split_debug_args_stops_at_double_dash() {
        let (rest, flags) = split_debug_args(args(&["cedar-console", "--", "--debug-x"]));
        assert_eq!(rest, args(&["cedar-console", "--", "--debug-x"]));
        assert!(!flags.any_enabled());
    }

    #[test]
    fn test_log_settings_per_command() {
        let mut config = ConsoleConfig::default();
        config.logging.level = "info".to_string();
        config.logging.json = true;
        config.logging.log_dir = Some("logs".into());

        let serve = Cli::try_parse_from(["cedar-console", "serve"]).unwrap();
        let settings = log_settings(&config, &serve);
        assert_eq!(settings.level, "info");
        assert_eq!(settings.format, LogFormat::Json);
        assert!(settings.log_dir.is_some());

        let list = Cli::try_parse_from(["cedar-console", "policies", "list"]).unwrap();
        let settings = log_settings(&config, &list);
        assert_eq!(settings.level, "warn");
        assert!(settings.log_dir.is_none());
    }

    #[test]
    fn test_verbose_raises_level_through_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cedar_console.toml");
        std::fs::write(&path, "[agent]\nurl = \"http://file-agent:8180\"\n").unwrap();

        let cli = Cli::try_parse_from([
            "cedar-console",
            "health",
            "-v",
            "--config",
            path.to_str().unwrap(),
            "--agent-url",
            "http://cli-agent:9000",
        ])
        .unwrap();
        let config = load_console_config(&cli).unwrap();
        assert_eq!(config.agent.url, "http://cli-agent:9000");
        assert_eq!(log_settings(&config, &cli).level, "debug");
    }
}
