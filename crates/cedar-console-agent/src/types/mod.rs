// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Types shared by the agent client, the proxy and the CLI.
*/

pub mod dtos;
pub mod entity_uid;
pub mod errors;

// Re-export for convenience
pub use dtos::*;
pub use entity_uid::{EntityUid, EntityUidParseError};
pub use errors::{AgentError, AgentResult};

/// Cedar schema document; opaque to the console
pub type Schema = serde_json::Value;
