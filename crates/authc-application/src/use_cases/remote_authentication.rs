//! Remote Authentication Use Case
//!
//! Application service for checking credentials against the account
//! service. Issues one POST per attempt through the injected transport and
//! translates status codes into domain results.

use crate::ports::http::{HttpPostClient, HttpPostParams, HttpStatusCode};
use async_trait::async_trait;
use authc_domain::entities::AccountModel;
use authc_domain::error::{Error, Result};
use authc_domain::usecases::Authentication;
use authc_domain::value_objects::AuthenticationParams;
use std::sync::Arc;
use tracing::debug;

/// The transport contract specialized to the login exchange
pub type AuthenticationHttpClient = dyn HttpPostClient<AuthenticationParams, AccountModel>;

/// `Authentication` implementation backed by a remote login endpoint
///
/// Owns the endpoint URL and the injected transport. Stateless beyond that
/// immutable configuration, so one instance serves concurrent calls; each
/// call performs exactly one transport invocation with no retry.
pub struct RemoteAuthentication {
    url: String,
    http_client: Arc<AuthenticationHttpClient>,
}

impl RemoteAuthentication {
    /// Create a use case targeting `url` through `http_client`
    pub fn new(url: impl Into<String>, http_client: Arc<AuthenticationHttpClient>) -> Self {
        Self {
            url: url.into(),
            http_client,
        }
    }

    /// Endpoint URL the login request is sent to
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Authentication for RemoteAuthentication {
    /// Check credentials against the remote endpoint
    ///
    /// Status mapping: 200 yields the account from the response body, 401
    /// maps to [`Error::InvalidCredentials`], and everything else
    /// (including 400 and transport failures) collapses into
    /// [`Error::Unexpected`]. Callers can distinguish rejected credentials
    /// from any other failure, and nothing finer than that.
    async fn authenticate(&self, params: AuthenticationParams) -> Result<AccountModel> {
        debug!(url = %self.url, email = %params.email, "sending authentication request");

        let response = self
            .http_client
            .post(HttpPostParams {
                url: self.url.clone(),
                body: Some(params),
            })
            .await
            .map_err(|e| Error::unexpected_with_source("authentication request failed", e))?;

        debug!(status = %response.status_code, "authentication response received");

        match response.status_code {
            HttpStatusCode::OK => response
                .body
                .ok_or_else(|| Error::unexpected("authentication response had no body")),
            HttpStatusCode::UNAUTHORIZED => Err(Error::InvalidCredentials),
            HttpStatusCode::BAD_REQUEST => Err(Error::unexpected(
                "authentication request was rejected as malformed",
            )),
            status => Err(Error::unexpected(format!(
                "authentication failed with status {status}"
            ))),
        }
    }
}
