//! Form validation contracts
//!
//! [`Validation`] is the boundary the presentation layer consumes to
//! revalidate fields as the user types. The composite implementation in
//! [`crate::validation`] assembles it from single-field rules.

/// Form validation boundary
///
/// `None` means the value is valid for that field; `Some` carries the
/// user-facing error message.
pub trait Validation: Send + Sync {
    /// Validate one field value, returning an error message when invalid
    fn validate(&self, field: &str, value: &str) -> Option<String>;
}

/// A single validation rule bound to one field name
///
/// The unit a [`crate::validation::composite::ValidationComposite`] is
/// assembled from.
pub trait FieldValidation: Send + Sync {
    /// Name of the field this rule applies to
    fn field(&self) -> &str;

    /// Check one value against the rule
    fn validate(&self, value: &str) -> Option<String>;
}
