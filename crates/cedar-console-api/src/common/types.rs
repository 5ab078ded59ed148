// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Extractors shared by the endpoints
//!
//! `Json` and `Path` reject malformed input with the proxy's own
//! `{"error": ...}` body instead of axum's plain-text rejection.

use axum::extract::{FromRequest, FromRequestParts};
use axum::response::IntoResponse;
use serde::Serialize;

use super::ApiError;

pub use crate::transports::http::server::ApiState;
pub use axum::extract::State;

/// JSON body extractor and response wrapper
#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> axum::response::Response {
        axum::Json(self.0).into_response()
    }
}

/// Path parameter extractor
#[derive(Debug, Clone, Copy, Default, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct Path<T>(pub T);
