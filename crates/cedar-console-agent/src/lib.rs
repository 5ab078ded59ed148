// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
# Cedar Console Agent Layer

Everything the console knows about a Cedar agent: the JSON data model, the
`CedarAgent` client trait with its HTTP implementation, the built-in demo
scenarios and the operator form state.

## Architecture

```text
┌──────────────────────────────────────────────────────────┐
│          FRONT ENDS                                       │
│  cedar-console-api (axum proxy), cedar-console-cli        │
└────────────────────────────┬─────────────────────────────┘
                             ↓
┌──────────────────────────────────────────────────────────┐
│          AGENT LAYER (This Crate)                         │
│  • CedarAgent trait      - policies, data, schema, authz  │
│  • scenarios             - clean-slate demo loading       │
│  • console               - forms and JSON editors         │
└────────────────────────────┬─────────────────────────────┘
                             ↓  HTTP /v1
┌──────────────────────────────────────────────────────────┐
│          CEDAR AGENT (external process)                   │
└──────────────────────────────────────────────────────────┘
```

Policy parsing and evaluation happen in the agent; nothing here interprets
Cedar.

## Usage

```rust,no_run
use cedar_console_agent::{CedarAgent, HttpCedarAgent};
use std::time::Duration;

# async fn run() -> Result<(), Box<dyn std::error::Error>> {
let agent = HttpCedarAgent::new("http://localhost:8180", Duration::from_secs(10))?;
for policy in agent.list_policies().await? {
    println!("{}: {}", policy.id, policy.content);
}
# Ok(())
# }
```
*/

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod console;
pub mod impls;
pub mod scenarios;
pub mod traits;
pub mod types;

// Re-export for convenience
pub use console::FormError;
pub use impls::HttpCedarAgent;
pub use scenarios::{
    builtin_scenarios, find_scenario, load_scenario, load_scenario_by_id, LoadReport, Scenario,
    ScenarioError, ScenarioSummary,
};
pub use traits::CedarAgent;
pub use types::*;
