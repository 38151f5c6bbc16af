//! Email shape rule

use crate::ports::validation::FieldValidation;
use regex::Regex;
use std::sync::LazyLock;

/// Message returned when a value does not look like an email address
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email address";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\w+([.-]?\w+)*@\w+([.-]?\w+)*(\.\w{2,3})+$").expect("Invalid regex")
});

/// Rejects values that do not match the email shape
///
/// An empty value passes; emptiness is the required rule's concern, which
/// keeps the two error messages independent.
pub struct EmailValidation {
    field: String,
}

impl EmailValidation {
    /// Create the rule for `field`
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

impl FieldValidation for EmailValidation {
    fn field(&self) -> &str {
        &self.field
    }

    fn validate(&self, value: &str) -> Option<String> {
        if value.is_empty() || EMAIL_RE.is_match(value) {
            None
        } else {
            Some(INVALID_EMAIL_MESSAGE.to_string())
        }
    }
}
