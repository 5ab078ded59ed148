// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
`CedarAgent` over HTTP, using the agent's `/v1` REST API.
*/

use std::time::Duration;

use async_trait::async_trait;
use cedar_console_config::AgentConfig;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::traits::CedarAgent;
use crate::types::*;

const API_PREFIX: &str = "v1";

/// HTTP client for a running Cedar agent
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpCedarAgent {
    base_url: Url,
    http_client: reqwest::Client,
}

impl HttpCedarAgent {
    /// Create a client for the agent at `base_url` (e.g. `http://localhost:8180`)
    ///
    /// # Arguments
    /// * `base_url` - Agent root; a trailing slash or path prefix is allowed
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> AgentResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AgentError::Transport(e.to_string()))?;
        Self::with_http_client(base_url, http_client)
    }

    /// Create a client using a pre-configured `reqwest::Client`
    pub fn with_http_client(base_url: &str, http_client: reqwest::Client) -> AgentResult<Self> {
        let base_url = Url::parse(base_url.trim())?;
        if base_url.cannot_be_a_base() {
            return Err(AgentError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self { base_url, http_client })
    }

    pub fn from_config(config: &AgentConfig) -> AgentResult<Self> {
        Self::new(&config.url, config.timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/v1/{segments...}`, each segment percent-encoded on its own
    fn endpoint(&self, segments: &[&str]) -> AgentResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AgentError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(API_PREFIX)
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> AgentResult<RequestBuilder> {
        let url = self.endpoint(segments)?;
        debug!(target: "cedar-console-agent", "{} {}", method, url);
        Ok(self.http_client.request(method, url))
    }

    /// Send and turn any non-2xx status into `AgentError::Upstream`
    async fn execute(&self, builder: RequestBuilder) -> AgentResult<Response> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        debug!(
            target: "cedar-console-agent",
            "Agent responded {}: {}", status, body
        );
        Err(AgentError::Upstream {
            status: status.as_u16(),
            body,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> AgentResult<T> {
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// For operations whose success carries no payload (204 or any body)
    async fn discard(response: Response) -> AgentResult<()> {
        let _ = response.bytes().await?;
        Ok(())
    }
}

#[async_trait]
impl CedarAgent for HttpCedarAgent {
    async fn health(&self) -> HealthStatus {
        // Trailing empty segment gives `/v1/`
        let builder = match self.request(Method::GET, &[""]) {
            Ok(builder) => builder,
            Err(e) => return HealthStatus::Disconnected { error: e.to_string() },
        };

        // Any HTTP answer means the agent is up, whatever the status
        match builder.send().await {
            Ok(response) => match response.text().await {
                Ok(message) => HealthStatus::Connected { message },
                Err(e) => HealthStatus::Disconnected { error: e.to_string() },
            },
            Err(e) => {
                warn!(target: "cedar-console-agent", "Cedar agent unreachable at {}: {}", self.base_url, e);
                HealthStatus::Disconnected { error: e.to_string() }
            }
        }
    }

    async fn list_policies(&self) -> AgentResult<Vec<Policy>> {
        let response = self.execute(self.request(Method::GET, &["policies"])?).await?;
        Self::decode(response).await
    }

    async fn get_policy(&self, id: &str) -> AgentResult<Policy> {
        let response = self.execute(self.request(Method::GET, &["policies", id])?).await?;
        Self::decode(response).await
    }

    async fn create_policy(&self, policy: &Policy) -> AgentResult<Policy> {
        let builder = self.request(Method::POST, &["policies"])?.json(policy);
        Self::decode(self.execute(builder).await?).await
    }

    async fn update_policy(&self, id: &str, update: &PolicyUpdate) -> AgentResult<Policy> {
        let builder = self.request(Method::PUT, &["policies", id])?.json(update);
        Self::decode(self.execute(builder).await?).await
    }

    async fn replace_policies(&self, policies: &[Policy]) -> AgentResult<Vec<Policy>> {
        let builder = self.request(Method::PUT, &["policies"])?.json(policies);
        Self::decode(self.execute(builder).await?).await
    }

    async fn delete_policy(&self, id: &str) -> AgentResult<()> {
        let response = self.execute(self.request(Method::DELETE, &["policies", id])?).await?;
        Self::discard(response).await
    }

    async fn list_entities(&self) -> AgentResult<Vec<Entity>> {
        let response = self.execute(self.request(Method::GET, &["data"])?).await?;
        Self::decode(response).await
    }

    async fn replace_entities(&self, entities: &[Entity]) -> AgentResult<Vec<Entity>> {
        let builder = self.request(Method::PUT, &["data"])?.json(entities);
        Self::decode(self.execute(builder).await?).await
    }

    async fn delete_entities(&self) -> AgentResult<()> {
        let response = self.execute(self.request(Method::DELETE, &["data"])?).await?;
        Self::discard(response).await
    }

    async fn get_schema(&self) -> AgentResult<Option<Schema>> {
        match self.execute(self.request(Method::GET, &["schema"])?).await {
            Ok(response) => Self::decode(response).await.map(Some),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn replace_schema(&self, schema: &Schema) -> AgentResult<Schema> {
        let builder = self.request(Method::PUT, &["schema"])?.json(schema);
        Self::decode(self.execute(builder).await?).await
    }

    async fn delete_schema(&self) -> AgentResult<()> {
        let response = self.execute(self.request(Method::DELETE, &["schema"])?).await?;
        Self::discard(response).await
    }

    async fn is_authorized(&self, request: &AuthorizationRequest) -> AgentResult<AuthorizationResponse> {
        let builder = self.request(Method::POST, &["is_authorized"])?.json(request);
        Self::decode(self.execute(builder).await?).await
    }
}
