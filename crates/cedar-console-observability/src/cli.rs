// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! CLI argument parsing for per-crate debug flags
//!
//! Supports flags like `--debug-cedar-console-api` and `--debug-all`.

use std::collections::BTreeMap;

use crate::KNOWN_CRATES;

/// Environment variable holding comma-separated crate names, or `all`
pub const DEBUG_ENV: &str = "CEDAR_CONSOLE_DEBUG";

/// Per-crate debug flags
#[derive(Debug, Clone, Default)]
pub struct CrateDebugFlags {
    pub enabled_crates: BTreeMap<String, bool>,
}

impl CrateDebugFlags {
    /// Collect `--debug-{crate}` flags; `--debug-all` turns on every known crate
    ///
    /// Other arguments are ignored, so the full process argv can be passed.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut flags = CrateDebugFlags::default();
        let names = args
            .into_iter()
            .filter_map(|arg| arg.strip_prefix("--debug-").map(str::to_string))
            .filter(|name| !name.is_empty());

        for name in names {
            match name.as_str() {
                "all" => flags.enable_all(),
                _ => flags.enable(name),
            }
        }
        flags
    }

    fn enable(&mut self, crate_name: impl Into<String>) {
        self.enabled_crates.insert(crate_name.into(), true);
    }

    /// Merge a `CEDAR_CONSOLE_DEBUG`-style value (`all` or `a,b,c`)
    pub fn merge_env_value(&mut self, value: &str) {
        if value.trim() == "all" {
            self.enable_all();
            return;
        }
        value
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .for_each(|name| self.enable(name));
    }

    pub fn enable_all(&mut self) {
        KNOWN_CRATES.iter().for_each(|name| self.enable(*name));
    }

    pub fn is_enabled(&self, crate_name: &str) -> bool {
        self.enabled_crates.contains_key(crate_name)
    }

    pub fn any_enabled(&self) -> bool {
        !self.enabled_crates.is_empty()
    }

    /// Build an `EnvFilter` directive string
    ///
    /// Format: `cedar-console-api=debug,info`, or just the default level.
    pub fn to_filter_string(&self, default_level: &str) -> String {
        let mut filters: Vec<String> = self
            .enabled_crates
            .keys()
            .map(|crate_name| format!("{}=debug", crate_name))
            .collect();
        filters.push(default_level.to_string());
        filters.join(",")
    }
}

/// Help text appended to `--help`
pub fn debug_flags_help() -> String {
    let mut help = String::from("Debug logging:\n");
    help.push_str("  --debug-all            debug level for every crate below\n");
    help.push_str("  --debug-<crate>        debug level for one crate\n\n");
    help.push_str("  Crates:\n");
    for name in KNOWN_CRATES {
        help.push_str(&format!("    {}\n", name));
    }
    help.push_str(&format!("\n  Or set {}=<crate>[,<crate>] or {}=all\n", DEBUG_ENV, DEBUG_ENV));
    help
}
