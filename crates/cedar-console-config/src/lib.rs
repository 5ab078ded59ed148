// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Cedar Console Configuration
//!
//! Type-safe configuration loader for the Cedar Console with support for:
//! - TOML file parsing (`cedar_console.toml`)
//! - Environment variable overrides (`CEDAR_AGENT_URL`, `CEDAR_CONSOLE_*`)
//! - CLI argument overrides
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cedar_console_config::{load_config, validate_config};
//!
//! let config = load_config(None, None).expect("Failed to load config");
//! validate_config(&config).expect("Invalid config");
//!
//! println!("Agent URL: {}", config.agent.url);
//! println!("Listening on {}:{}", config.server.host, config.server.port);
//! ```
//!
//! A missing configuration file is not an error: defaults are used and the
//! environment still applies, so `CEDAR_AGENT_URL=... cedar-console serve`
//! works without any file on disk.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod loader;
pub mod types;
pub mod validation;

pub use loader::{apply_cli_overrides, apply_environment_overrides, find_config_file, load_config};
pub use types::*;
pub use validation::{validate_config, ConfigValidationError};

/// Configuration file name searched for on disk
pub const CONFIG_FILE_NAME: &str = "cedar_console.toml";

/// Errors from locating, reading, parsing or validating configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0}")]
    FileNotFound(String),

    #[error("Cannot read cedar_console.toml: {0}")]
    IoError(#[from] std::io::Error),

    #[error("cedar_console.toml is not valid TOML: {0}")]
    ParseError(String),

    #[error("Invalid Cedar Console configuration: {0}")]
    ValidationError(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
