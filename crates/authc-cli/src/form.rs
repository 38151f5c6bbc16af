//! Login form state
//!
//! Mirrors what the user has typed plus the per-field error messages the
//! validation boundary produced for those values. The form never decides
//! validity itself; it asks the injected [`Validation`] on every change.

use authc_application::ports::validation::Validation;
use authc_domain::constants::{FIELD_EMAIL, FIELD_PASSWORD};
use authc_domain::value_objects::AuthenticationParams;
use std::fmt;
use std::sync::Arc;

/// State of the login form
///
/// A fresh form starts with empty fields, which the login rules reject,
/// so the form is invalid until both fields have acceptable values.
pub struct LoginForm {
    validation: Arc<dyn Validation>,
    email: String,
    password: String,
    email_error: Option<String>,
    password_error: Option<String>,
}

impl LoginForm {
    /// Create an empty form validated against `validation`
    pub fn new(validation: Arc<dyn Validation>) -> Self {
        let email_error = validation.validate(FIELD_EMAIL, "");
        let password_error = validation.validate(FIELD_PASSWORD, "");
        Self {
            validation,
            email: String::new(),
            password: String::new(),
            email_error,
            password_error,
        }
    }

    /// Set the email field and revalidate it
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
        self.email_error = self.validation.validate(FIELD_EMAIL, &self.email);
    }

    /// Set the password field and revalidate it
    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
        self.password_error = self.validation.validate(FIELD_PASSWORD, &self.password);
    }

    /// Current email value
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Validation message for the email field, when invalid
    pub fn email_error(&self) -> Option<&str> {
        self.email_error.as_deref()
    }

    /// Validation message for the password field, when invalid
    pub fn password_error(&self) -> Option<&str> {
        self.password_error.as_deref()
    }

    /// Whether every field currently validates clean
    pub fn is_valid(&self) -> bool {
        self.email_error.is_none() && self.password_error.is_none()
    }

    /// Snapshot the current field values as authentication parameters
    pub fn params(&self) -> AuthenticationParams {
        AuthenticationParams::new(self.email.clone(), self.password.clone())
    }
}

// Manual Debug: the password stays out of log output.
impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("email_error", &self.email_error)
            .field("password_error", &self.password_error)
            .finish()
    }
}
