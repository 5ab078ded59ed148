// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation

use crate::{ConfigError, ConfigResult, ConsoleConfig};
use url::Url;

const KNOWN_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "warning", "error"];

/// Validation errors that can occur during config validation
#[derive(Debug, Clone)]
pub enum ConfigValidationError {
    InvalidAgentUrl { url: String, reason: String },
    InvalidPort { port: u16 },
    MissingRequired { field: String },
    InvalidValue { field: String, reason: String },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAgentUrl { url, reason } => {
                write!(f, "agent.url = '{}' is not usable: {}", url, reason)
            }
            Self::InvalidPort { port } => {
                write!(f, "server.port = {} is not a bindable port", port)
            }
            Self::MissingRequired { field } => {
                write!(f, "Missing required configuration: {}", field)
            }
            Self::InvalidValue { field, reason } => {
                write!(f, "Invalid configuration value for {}: {}", field, reason)
            }
        }
    }
}

/// Validate the complete configuration
///
/// All problems are collected and reported together.
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` listing every failed check.
pub fn validate_config(config: &ConsoleConfig) -> ConfigResult<()> {
    let mut errors = Vec::new();

    validate_agent(config, &mut errors);
    validate_server(config, &mut errors);
    validate_logging(config, &mut errors);

    if !errors.is_empty() {
        let error_messages = errors
            .iter()
            .map(|e| format!("  - {}", e))
            .collect::<Vec<_>>()
            .join("\n");

        return Err(ConfigError::ValidationError(format!(
            "Configuration validation failed:\n{}",
            error_messages
        )));
    }

    Ok(())
}

fn validate_agent(config: &ConsoleConfig, errors: &mut Vec<ConfigValidationError>) {
    let raw = config.agent.url.trim();
    if raw.is_empty() {
        errors.push(ConfigValidationError::MissingRequired {
            field: "agent.url".to_string(),
        });
    } else {
        match Url::parse(raw) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    errors.push(ConfigValidationError::InvalidAgentUrl {
                        url: raw.to_string(),
                        reason: format!("unsupported scheme '{}'", url.scheme()),
                    });
                } else if url.host_str().map_or(true, str::is_empty) {
                    errors.push(ConfigValidationError::InvalidAgentUrl {
                        url: raw.to_string(),
                        reason: "missing host".to_string(),
                    });
                }
            }
            Err(e) => errors.push(ConfigValidationError::InvalidAgentUrl {
                url: raw.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    if config.agent.timeout_secs == 0 {
        errors.push(ConfigValidationError::InvalidValue {
            field: "agent.timeout_secs".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
}

fn validate_server(config: &ConsoleConfig, errors: &mut Vec<ConfigValidationError>) {
    if config.server.port == 0 {
        errors.push(ConfigValidationError::InvalidPort {
            port: config.server.port,
        });
    }
    if config.server.host.trim().is_empty() {
        errors.push(ConfigValidationError::MissingRequired {
            field: "server.host".to_string(),
        });
    }
}

fn validate_logging(config: &ConsoleConfig, errors: &mut Vec<ConfigValidationError>) {
    let level = config.logging.level.to_lowercase();
    if !KNOWN_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "logging.level".to_string(),
            reason: format!("expected one of {}", KNOWN_LEVELS.join(", ")),
        });
    }
}
