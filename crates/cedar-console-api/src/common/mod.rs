// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// Common types used across all endpoints

pub mod error;
pub mod types;
pub use types::{ApiState, Json, Path, State};

pub use error::{ApiError, ErrorBody};

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
