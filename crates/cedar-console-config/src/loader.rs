// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! Three tiers, later ones win:
//! 1. TOML file (or built-in defaults when no file exists)
//! 2. Environment variables
//! 3. CLI arguments

use crate::{ConfigError, ConfigResult, ConsoleConfig, RunMode, CONFIG_FILE_NAME};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "CEDAR_CONSOLE_CONFIG_PATH";

/// Find the console configuration file
///
/// Search order:
/// 1. `CEDAR_CONSOLE_CONFIG_PATH` environment variable
/// 2. Current working directory: `./cedar_console.toml`
/// 3. Up to five parent directories
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if the env var points at a missing file
/// or nothing is found in any searched location.
pub fn find_config_file() -> ConfigResult<PathBuf> {
    if let Ok(env_path) = env::var(CONFIG_PATH_ENV) {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        }
        return Err(ConfigError::FileNotFound(format!(
            "{} points at {}, which does not exist",
            CONFIG_PATH_ENV,
            path.display()
        )));
    }

    let mut search_paths = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));
        let mut current = cwd.as_path();
        for _ in 0..5 {
            match current.parent() {
                Some(parent) => {
                    search_paths.push(parent.join(CONFIG_FILE_NAME));
                    current = parent;
                }
                None => break,
            }
        }
    }

    if let Some(found) = search_paths.iter().find(|p| p.exists()) {
        return Ok(found.clone());
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::FileNotFound(format!(
        "'{}' not found in any of these locations:\n{}",
        CONFIG_FILE_NAME, search_list
    )))
}

/// Load configuration
///
/// With an explicit `config_path` the file must exist. Without one, the
/// file is discovered via [`find_config_file`]; if discovery fails the
/// built-in defaults are used instead. An explicitly configured
/// `CEDAR_CONSOLE_CONFIG_PATH` that does not exist is still an error.
pub fn load_config(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<ConsoleConfig> {
    let mut config = match config_path {
        Some(path) => parse_file(path)?,
        None => match find_config_file() {
            Ok(path) => parse_file(&path)?,
            Err(err) if env::var(CONFIG_PATH_ENV).is_ok() => return Err(err),
            Err(_) => ConsoleConfig::default(),
        },
    };

    apply_environment_overrides(&mut config);

    if let Some(cli) = cli_args {
        apply_cli_overrides(&mut config, cli);
    }

    Ok(config)
}

fn parse_file(path: &Path) -> ConfigResult<ConsoleConfig> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

fn parse_bool(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "yes")
}

/// Apply environment variable overrides to configuration
///
/// Supported environment variables:
/// - `CEDAR_AGENT_URL` -> `agent.url`
/// - `CEDAR_AGENT_TIMEOUT_SECS` -> `agent.timeout_secs`
/// - `CEDAR_CONSOLE_HOST` -> `server.host`
/// - `CEDAR_CONSOLE_PORT` -> `server.port`
/// - `CEDAR_CONSOLE_CORS_ALLOW_ANY` -> `server.cors_allow_any`
/// - `CEDAR_CONSOLE_LOG_LEVEL` -> `logging.level`
/// - `CEDAR_CONSOLE_LOG_DIR` -> `logging.log_dir`
/// - `CEDAR_CONSOLE_ENV` -> `environment.mode`
///
/// Unparseable numeric or mode values are ignored.
pub fn apply_environment_overrides(config: &mut ConsoleConfig) {
    if let Ok(value) = env::var("CEDAR_AGENT_URL") {
        if !value.trim().is_empty() {
            config.agent.url = value;
        }
    }
    if let Ok(value) = env::var("CEDAR_AGENT_TIMEOUT_SECS") {
        if let Ok(secs) = value.parse::<u64>() {
            config.agent.timeout_secs = secs;
        }
    }

    if let Ok(value) = env::var("CEDAR_CONSOLE_HOST") {
        config.server.host = value;
    }
    if let Ok(value) = env::var("CEDAR_CONSOLE_PORT") {
        if let Ok(port) = value.parse::<u16>() {
            config.server.port = port;
        }
    }
    if let Ok(value) = env::var("CEDAR_CONSOLE_CORS_ALLOW_ANY") {
        config.server.cors_allow_any = parse_bool(&value);
    }

    if let Ok(value) = env::var("CEDAR_CONSOLE_LOG_LEVEL") {
        config.logging.level = value;
    }
    if let Ok(value) = env::var("CEDAR_CONSOLE_LOG_DIR") {
        config.logging.log_dir = Some(PathBuf::from(value));
    }

    if let Ok(value) = env::var("CEDAR_CONSOLE_ENV") {
        if let Ok(mode) = value.parse::<RunMode>() {
            config.environment.mode = mode;
        }
    }
}

/// Apply CLI argument overrides to configuration
///
/// Recognised keys: `agent_url`, `agent_timeout_secs`, `host`, `port`,
/// `log_level`, `mode`.
pub fn apply_cli_overrides(config: &mut ConsoleConfig, cli_args: &HashMap<String, String>) {
    if let Some(value) = cli_args.get("agent_url") {
        config.agent.url = value.clone();
    }
    if let Some(value) = cli_args.get("agent_timeout_secs") {
        if let Ok(secs) = value.parse::<u64>() {
            config.agent.timeout_secs = secs;
        }
    }
    if let Some(value) = cli_args.get("host") {
        config.server.host = value.clone();
    }
    if let Some(value) = cli_args.get("port") {
        if let Ok(port) = value.parse::<u16>() {
            config.server.port = port;
        }
    }
    if let Some(value) = cli_args.get("log_level") {
        config.logging.level = value.clone();
    }
    if let Some(value) = cli_args.get("mode") {
        if let Ok(mode) = value.parse::<RunMode>() {
            config.environment.mode = mode;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use std::sync::Mutex;
    use tempfile::tempdir;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const TOUCHED_VARS: &[&str] = &[
        CONFIG_PATH_ENV,
        "CEDAR_AGENT_URL",
        "CEDAR_AGENT_TIMEOUT_SECS",
        "CEDAR_CONSOLE_HOST",
        "CEDAR_CONSOLE_PORT",
        "CEDAR_CONSOLE_CORS_ALLOW_ANY",
        "CEDAR_CONSOLE_LOG_LEVEL",
        "CEDAR_CONSOLE_LOG_DIR",
        "CEDAR_CONSOLE_ENV",
    ];

    fn clear_env() {
        for var in TOUCHED_VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_find_config_file_env_var() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        clear_env();
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("custom.toml");
        File::create(&config_path).unwrap();

        env::set_var(CONFIG_PATH_ENV, config_path.to_str().unwrap());
        let result = find_config_file();
        clear_env();

        assert_eq!(result.unwrap(), config_path);
    }

    #[test]
    fn test_missing_env_config_path_is_error() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        clear_env();
        env::set_var(CONFIG_PATH_ENV, "/definitely/not/here/cedar_console.toml");
        let result = load_config(None, None);
        clear_env();

        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_load_minimal_config() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        clear_env();
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);

        let mut file = File::create(&config_path).unwrap();
        writeln!(file, "[agent]").unwrap();
        writeln!(file, "url = \"http://agent.internal:8180\"").unwrap();
        writeln!(file, "[server]").unwrap();
        writeln!(file, "port = 9000").unwrap();

        let config = load_config(Some(&config_path), None).unwrap();

        assert_eq!(config.agent.url, "http://agent.internal:8180");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_explicit_missing_file_is_io_error() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        clear_env();
        let dir = tempdir().unwrap();
        let result = load_config(Some(&dir.path().join("nope.toml")), None);
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_environment_overrides() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        clear_env();
        let mut config = ConsoleConfig::default();

        env::set_var("CEDAR_AGENT_URL", "http://10.1.2.3:8180");
        env::set_var("CEDAR_CONSOLE_PORT", "9999");
        env::set_var("CEDAR_CONSOLE_ENV", "production");
        env::set_var("CEDAR_AGENT_TIMEOUT_SECS", "not-a-number");

        apply_environment_overrides(&mut config);
        clear_env();

        assert_eq!(config.agent.url, "http://10.1.2.3:8180");
        assert_eq!(config.server.port, 9999);
        assert_eq!(config.environment.mode, RunMode::Production);
        assert_eq!(config.agent.timeout_secs, 10);
    }

    #[test]
    fn test_blank_agent_url_keeps_default() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        clear_env();
        let mut config = ConsoleConfig::default();
        env::set_var("CEDAR_AGENT_URL", "  ");
        apply_environment_overrides(&mut config);
        clear_env();

        assert_eq!(config.agent.url, crate::DEFAULT_AGENT_URL);
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = ConsoleConfig::default();
        let mut cli_args = HashMap::new();
        cli_args.insert("host".to_string(), "0.0.0.0".to_string());
        cli_args.insert("port".to_string(), "7777".to_string());
        cli_args.insert("mode".to_string(), "test".to_string());

        apply_cli_overrides(&mut config, &cli_args);

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 7777);
        assert_eq!(config.environment.mode, RunMode::Test);
    }

    #[test]
    fn test_override_precedence() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        clear_env();
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);

        let mut file = File::create(&config_path).unwrap();
        writeln!(file, "[agent]").unwrap();
        writeln!(file, "url = \"http://file-agent:8180\"").unwrap();
        writeln!(file, "[server]").unwrap();
        writeln!(file, "port = 8000").unwrap();

        env::set_var("CEDAR_AGENT_URL", "http://env-agent:8180");
        env::set_var("CEDAR_CONSOLE_PORT", "9000");

        let mut cli_args = HashMap::new();
        cli_args.insert("agent_url".to_string(), "http://cli-agent:8180".to_string());

        let config = load_config(Some(&config_path), Some(&cli_args)).unwrap();
        clear_env();

        // CLI wins for the agent URL, env wins for the port
        assert_eq!(config.agent.url, "http://cli-agent:8180");
        assert_eq!(config.server.port, 9000);
    }
}
