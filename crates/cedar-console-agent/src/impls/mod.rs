// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Agent client implementations.
*/

pub mod http_agent;

pub use http_agent::HttpCedarAgent;
