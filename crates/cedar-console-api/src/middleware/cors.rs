// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

// CORS middleware for HTTP API

use axum::http::{HeaderValue, Method};
use cedar_console_config::ServerConfig;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Create the CORS layer for the proxy
///
/// With `cors_allow_any` every origin is accepted. Otherwise only the
/// console's own origin (`http://{host}:{port}`) is, which covers a browser
/// front end served from the same address.
pub fn create_cors_layer(config: &ServerConfig) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
        .allow_credentials(false);

    if config.cors_allow_any {
        return base.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = [
        format!("http://{}:{}", config.host, config.port),
        format!("http://localhost:{}", config.port),
    ]
    .iter()
    .filter_map(|origin| HeaderValue::from_str(origin).ok())
    .collect();

    base.allow_origin(AllowOrigin::list(origins))
}
