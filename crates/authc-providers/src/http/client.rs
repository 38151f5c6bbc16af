//! Reqwest-backed POST transport
//!
//! Implements the application layer's POST contract with a pooled reqwest
//! client. Status codes pass through verbatim; only send-level failures
//! become errors, so interpreting a 401 or 500 stays the caller's job.

use async_trait::async_trait;
use authc_application::ports::http::{
    HttpPostClient, HttpPostParams, HttpResponse, HttpStatusCode,
};
use authc_domain::error::{Error, Result};
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::constants::{CONTENT_TYPE_HEADER, CONTENT_TYPE_JSON};
use crate::http::config::HttpClientConfig;

/// POST transport backed by a pooled reqwest client
///
/// One instance holds one connection pool; clone-free sharing happens
/// through `Arc` at the composition root.
pub struct ReqwestHttpPostClient {
    client: Client,
    config: HttpClientConfig,
}

impl ReqwestHttpPostClient {
    /// Build a transport from the given configuration
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .pool_max_idle_per_host(config.max_idle_per_host)
            .pool_idle_timeout(config.idle_timeout)
            .tcp_keepalive(config.keepalive)
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::network_with_source("failed to build HTTP client", e))?;

        Ok(Self { client, config })
    }

    /// Configuration the transport was built from
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }
}

#[async_trait]
impl<B, R> HttpPostClient<B, R> for ReqwestHttpPostClient
where
    B: Serialize + Send + Sync + 'static,
    R: DeserializeOwned + Send + 'static,
{
    async fn post(&self, params: HttpPostParams<B>) -> Result<HttpResponse<R>> {
        let mut request = self
            .client
            .post(&params.url)
            .header(CONTENT_TYPE_HEADER, CONTENT_TYPE_JSON);
        if let Some(body) = &params.body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::network_with_source(format!("POST {} failed", params.url), e))?;

        let status_code = HttpStatusCode::from(response.status().as_u16());
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::network_with_source("failed to read response body", e))?;

        // An empty or non-conforming payload is a missing body, not an error
        let body = if bytes.is_empty() {
            None
        } else {
            match serde_json::from_slice(&bytes) {
                Ok(value) => Some(value),
                Err(e) => {
                    debug!(
                        status = %status_code,
                        error = %e,
                        "response body did not match the expected shape"
                    );
                    None
                }
            }
        };

        Ok(HttpResponse { status_code, body })
    }
}
