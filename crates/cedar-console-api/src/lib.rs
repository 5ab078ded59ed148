// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// Cedar Console REST proxy
//
// Serves `/api/*` and relays each request to a Cedar agent through the
// `CedarAgent` trait, passing upstream status codes through unchanged.

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod common;
pub mod endpoints;
pub mod middleware;
pub mod openapi;
pub mod transports;

// Re-export commonly used types
pub use common::{ApiError, ApiResult, ErrorBody};
pub use transports::http::{create_http_server, run_http_server, ApiState};
