//! Credential Value Objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value Object: Authentication Parameters
///
/// The credentials a caller submits for a single authentication attempt.
/// Constructed by the caller and never mutated; serializes as the login
/// request body.
///
/// ## Business Rules
///
/// - Both fields must be present; field-level validation (shape, length)
///   is the validation boundary's job, not this type's
/// - The password never appears in `Debug` output
///
/// ## Example
///
/// ```
/// use authc_domain::value_objects::AuthenticationParams;
///
/// let params = AuthenticationParams::new("a@b.com", "123456");
/// assert_eq!(params.email, "a@b.com");
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationParams {
    /// Account email address
    pub email: String,
    /// Account password
    pub password: String,
}

impl AuthenticationParams {
    /// Create new authentication parameters
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

// Manual Debug: credentials end up in tracing output on failure paths,
// so the password is redacted.
impl fmt::Debug for AuthenticationParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticationParams")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
