//! Validation composite

use crate::ports::validation::{FieldValidation, Validation};

/// [`Validation`] implementation over an ordered list of field rules
///
/// Runs the rules registered for the requested field in insertion order
/// and returns the first error. Fields with no registered rules validate
/// clean.
pub struct ValidationComposite {
    validations: Vec<Box<dyn FieldValidation>>,
}

impl ValidationComposite {
    /// Assemble a composite from an already-built rule list
    pub fn new(validations: Vec<Box<dyn FieldValidation>>) -> Self {
        Self { validations }
    }
}

impl Validation for ValidationComposite {
    fn validate(&self, field: &str, value: &str) -> Option<String> {
        self.validations
            .iter()
            .filter(|v| v.field() == field)
            .find_map(|v| v.validate(value))
    }
}
