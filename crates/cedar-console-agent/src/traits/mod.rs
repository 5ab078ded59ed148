// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Agent client trait definitions.
*/

pub mod cedar_agent;

pub use cedar_agent::CedarAgent;
