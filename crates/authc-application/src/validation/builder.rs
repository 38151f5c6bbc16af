//! Fluent assembly of per-field rule lists

use super::email::EmailValidation;
use super::min_length::MinLengthValidation;
use super::required_field::RequiredFieldValidation;
use crate::ports::validation::FieldValidation;

/// Fluent builder for one field's rule list
///
/// Rules fire in the order they were added, so put `required` first when
/// the emptiness message should win.
///
/// # Example
///
/// ```
/// use authc_application::ValidationBuilder;
///
/// let rules = ValidationBuilder::field("email").required().email().build();
/// assert_eq!(rules.len(), 2);
/// ```
pub struct ValidationBuilder {
    field: String,
    validations: Vec<Box<dyn FieldValidation>>,
}

impl ValidationBuilder {
    /// Start building rules for `field`
    pub fn field(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            validations: Vec::new(),
        }
    }

    /// Require a non-empty value
    pub fn required(mut self) -> Self {
        self.validations
            .push(Box::new(RequiredFieldValidation::new(self.field.clone())));
        self
    }

    /// Require an email-shaped value
    pub fn email(mut self) -> Self {
        self.validations
            .push(Box::new(EmailValidation::new(self.field.clone())));
        self
    }

    /// Require at least `length` characters
    pub fn min(mut self, length: usize) -> Self {
        self.validations
            .push(Box::new(MinLengthValidation::new(self.field.clone(), length)));
        self
    }

    /// Finish and return the assembled rules
    pub fn build(self) -> Vec<Box<dyn FieldValidation>> {
        self.validations
    }
}
