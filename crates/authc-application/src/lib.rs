//! Application Layer - authc
//!
//! This crate contains the application layer of the authc login client,
//! implementing use cases and boundary contracts according to Clean
//! Architecture principles.
//!
//! ## Architecture
//!
//! The application layer:
//! - Implements the `Authentication` use case against a remote endpoint
//! - Defines ports (interfaces) for external dependencies
//! - Ships the field validation rules consumed by the presentation layer
//! - Has no dependencies on infrastructure or concrete transports
//!
//! ## Ports (Interfaces)
//!
//! - [`ports::http::HttpPostClient`]: the POST transport contract
//! - [`ports::validation::Validation`]: the form validation boundary
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `authc-domain`: entities, value objects, errors, and the use-case port
//! - Pure Rust libraries for async traits, logging, and pattern matching

pub mod ports;
pub mod use_cases;
pub mod validation;

pub use ports::http::{HttpPostClient, HttpPostParams, HttpResponse, HttpStatusCode};
pub use ports::validation::{FieldValidation, Validation};
pub use use_cases::remote_authentication::{AuthenticationHttpClient, RemoteAuthentication};
pub use validation::ValidationBuilder;
pub use validation::composite::ValidationComposite;
