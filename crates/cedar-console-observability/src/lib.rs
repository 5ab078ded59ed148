// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # cedar-console-observability
//!
//! Logging setup shared by the Cedar Console crates, with per-crate debug
//! flag support.
//!
//! ## Features
//! - `file-logging`: daily-rotated log files with run-folder retention

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod config;
pub mod init;

pub use cli::*;
pub use config::*;
pub use init::*;

/// Known Cedar Console crate names (tracing targets) for debug flags
pub const KNOWN_CRATES: &[&str] = &[
    "cedar-console-api",
    "cedar-console-agent",
    "cedar-console-config",
    "cedar-console-cli",
];
