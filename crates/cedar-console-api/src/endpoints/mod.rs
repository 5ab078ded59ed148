// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// Proxy endpoints, one module per agent resource

pub mod authorize;
pub mod data;
pub mod health;
pub mod overview;
pub mod policies;
pub mod scenarios;
pub mod schema;
