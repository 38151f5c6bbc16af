//! Field Validation Rules
//!
//! Single-field rules behind the [`FieldValidation`] contract plus the
//! composite and builder that assemble them into the [`Validation`]
//! boundary the login form consumes.
//!
//! [`FieldValidation`]: crate::ports::validation::FieldValidation
//! [`Validation`]: crate::ports::validation::Validation

/// Fluent per-field rule assembly
pub mod builder;
/// Composite implementing the validation boundary over rule lists
pub mod composite;
/// Email shape rule
pub mod email;
/// Minimum length rule
pub mod min_length;
/// Required field rule
pub mod required_field;

pub use builder::ValidationBuilder;
pub use composite::ValidationComposite;
pub use email::EmailValidation;
pub use min_length::MinLengthValidation;
pub use required_field::RequiredFieldValidation;
