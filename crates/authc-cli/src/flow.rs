//! Login submission flow
//!
//! Bridges the form to the authentication use case and folds every
//! possible result into one of four renderable outcomes. This is the only
//! place that discriminates the two domain errors; everything downstream
//! just prints what it is handed.

use crate::form::LoginForm;
use authc_application::ports::validation::Validation;
use authc_domain::entities::AccountModel;
use authc_domain::error::Error;
use authc_domain::usecases::Authentication;
use std::sync::Arc;
use tracing::warn;

/// Message shown when the server rejected the credentials
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password.";

/// Message shown for every other authentication failure
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Terminal outcome of one login submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The server accepted the credentials
    Authenticated(AccountModel),
    /// The form failed validation; no request was made
    Invalid {
        /// Message for the email field, when it was invalid
        email_error: Option<String>,
        /// Message for the password field, when it was invalid
        password_error: Option<String>,
    },
    /// The server rejected the credentials
    CredentialsRejected(String),
    /// Any other failure of the attempt
    Failed(String),
}

/// Validate-then-authenticate submission flow
///
/// Holds the two boundaries the login surface consumes. Submissions are
/// independent; the flow keeps no per-attempt state.
pub struct LoginFlow {
    authentication: Arc<dyn Authentication>,
    validation: Arc<dyn Validation>,
}

impl LoginFlow {
    /// Create a flow over the injected boundaries
    pub fn new(authentication: Arc<dyn Authentication>, validation: Arc<dyn Validation>) -> Self {
        Self {
            authentication,
            validation,
        }
    }

    /// A fresh form bound to this flow's validation rules
    pub fn form(&self) -> LoginForm {
        LoginForm::new(self.validation.clone())
    }

    /// Submit the form once
    ///
    /// An invalid form short-circuits without touching the network. A
    /// valid one performs exactly one authentication attempt and maps its
    /// result: success, rejected credentials, or the generic failure.
    pub async fn submit(&self, form: &LoginForm) -> LoginOutcome {
        if !form.is_valid() {
            return LoginOutcome::Invalid {
                email_error: form.email_error().map(String::from),
                password_error: form.password_error().map(String::from),
            };
        }

        match self.authentication.authenticate(form.params()).await {
            Ok(account) => LoginOutcome::Authenticated(account),
            Err(Error::InvalidCredentials) => {
                LoginOutcome::CredentialsRejected(INVALID_CREDENTIALS_MESSAGE.to_string())
            }
            Err(err) => {
                warn!(error = %err, "authentication attempt failed");
                LoginOutcome::Failed(GENERIC_FAILURE_MESSAGE.to_string())
            }
        }
    }
}
