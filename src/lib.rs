// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Cedar Console
//!
//! Management console for a Cedar authorization agent: a typed client for the
//! agent's REST API, built-in demo scenarios, operator form state, and an
//! HTTP proxy with OpenAPI documentation.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! cedar-console = "0.1"  # Default: api + observability
//! ```
//!
//! ## Feature Flags
//!
//! - **`api`** (default): axum proxy server and OpenAPI document
//! - **`observability`** (default): logging initialisation and debug flags
//! - **`file-logging`**: rolling JSON log files
//! - **`openapi`**: utoipa schemas on agent types without pulling in the server
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use cedar_console::prelude::*;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let agent = HttpCedarAgent::new("http://localhost:8180", Duration::from_secs(10))?;
//!
//! let report = load_scenario_by_id(&agent, "rbac").await?;
//! println!("Loaded {} policies", report.policies_loaded);
//!
//! let decision = AuthorizeForm::default().submit(&agent).await?;
//! println!("alice may view doc1: {}", decision.decision);
//! # Ok(())
//! # }
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cedar_console_agent as agent;
pub use cedar_console_config as config;

#[cfg(feature = "api")]
pub use cedar_console_api as api;

#[cfg(feature = "observability")]
pub use cedar_console_observability as observability;

/// Prelude with the most commonly used types
pub mod prelude {
    pub use crate::agent::console::{AuthorizeForm, PolicyForm};
    pub use crate::agent::{
        builtin_scenarios, load_scenario, load_scenario_by_id, AgentError, AuthorizationRequest,
        AuthorizationResponse, CedarAgent, Decision, Entity, EntityUid, HealthStatus, HttpCedarAgent, Policy,
        Scenario,
    };
    pub use crate::config::{load_config, ConsoleConfig};

    #[cfg(feature = "api")]
    pub use crate::api::{create_http_server, run_http_server, ApiState};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_prelude_scenarios() {
        use prelude::*;
        let ids: Vec<String> = builtin_scenarios().into_iter().map(|s: Scenario| s.id).collect();
        assert!(ids.contains(&"rbac".to_string()));
    }
}
