//! Required field rule

use crate::ports::validation::FieldValidation;

/// Message returned when a required field is empty
pub const REQUIRED_FIELD_MESSAGE: &str = "Required field";

/// Rejects empty and whitespace-only values
pub struct RequiredFieldValidation {
    field: String,
}

impl RequiredFieldValidation {
    /// Create the rule for `field`
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

impl FieldValidation for RequiredFieldValidation {
    fn field(&self) -> &str {
        &self.field
    }

    fn validate(&self, value: &str) -> Option<String> {
        if value.trim().is_empty() {
            Some(REQUIRED_FIELD_MESSAGE.to_string())
        } else {
            None
        }
    }
}
