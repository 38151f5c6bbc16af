//! Minimum length rule

use crate::ports::validation::FieldValidation;

/// Rejects values shorter than the configured number of characters
///
/// Length is counted in characters, not bytes, so multi-byte input is not
/// penalized.
pub struct MinLengthValidation {
    field: String,
    min_length: usize,
}

impl MinLengthValidation {
    /// Create the rule for `field` with the given minimum
    pub fn new(field: impl Into<String>, min_length: usize) -> Self {
        Self {
            field: field.into(),
            min_length,
        }
    }
}

impl FieldValidation for MinLengthValidation {
    fn field(&self) -> &str {
        &self.field
    }

    fn validate(&self, value: &str) -> Option<String> {
        if value.chars().count() < self.min_length {
            Some(format!("Must be at least {} characters", self.min_length))
        } else {
            None
        }
    }
}
