//! Composition Root
//!
//! Builds the object graph for a login session: the reqwest transport,
//! the remote authentication use case targeting the configured endpoint,
//! and the login form validation rules.
//!
//! ```text
//! AppConfig → ReqwestHttpPostClient → RemoteAuthentication ┐
//!           → ValidationComposite ─────────────────────────┴→ AppContext
//! ```

use crate::config::AppConfig;
use authc_application::ports::validation::Validation;
use authc_application::use_cases::{AuthenticationHttpClient, RemoteAuthentication};
use authc_application::validation::{ValidationBuilder, ValidationComposite};
use authc_domain::constants::{FIELD_EMAIL, FIELD_PASSWORD, MIN_PASSWORD_LENGTH};
use authc_domain::error::Result;
use authc_domain::usecases::Authentication;
use authc_providers::http::{HttpClientConfig, ReqwestHttpPostClient};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Application context holding the wired object graph
///
/// This is the composition root output: configuration plus the two
/// boundaries the presentation layer consumes.
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    authentication: Arc<dyn Authentication>,
    validation: Arc<dyn Validation>,
}

impl AppContext {
    /// Get the authentication use case
    pub fn authentication(&self) -> Arc<dyn Authentication> {
        self.authentication.clone()
    }

    /// Get the login form validation boundary
    pub fn validation(&self) -> Arc<dyn Validation> {
        self.validation.clone()
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Initialize the application context
///
/// Builds the HTTP transport from the API configuration, wires it into
/// the remote authentication use case targeting the configured login
/// endpoint, and assembles the login validation rules.
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    info!("Initializing application context");

    let config = Arc::new(config);

    let http_config = HttpClientConfig::with_timeout(Duration::from_secs(config.api.timeout_secs));
    let http_client: Arc<AuthenticationHttpClient> =
        Arc::new(ReqwestHttpPostClient::new(http_config)?);

    let login_url = config.api.login_url();
    let authentication: Arc<dyn Authentication> =
        Arc::new(RemoteAuthentication::new(login_url.clone(), http_client));
    info!(url = %login_url, "Wired remote authentication");

    let validation: Arc<dyn Validation> = Arc::new(login_validation());
    info!("Assembled login validation rules");

    Ok(AppContext {
        config,
        authentication,
        validation,
    })
}

/// The login form rule set
///
/// Email must be present and email-shaped; the password must be present
/// and meet the minimum length.
pub fn login_validation() -> ValidationComposite {
    let mut rules = ValidationBuilder::field(FIELD_EMAIL).required().email().build();
    rules.extend(
        ValidationBuilder::field(FIELD_PASSWORD)
            .required()
            .min(MIN_PASSWORD_LENGTH)
            .build(),
    );
    ValidationComposite::new(rules)
}

/// Initialize application context for testing
pub fn init_test_app() -> Result<AppContext> {
    init_app(AppConfig::default())
}
