//! Boundary Contracts
//!
//! Defines the contracts between the application layer and the outside
//! world. Ports enable dependency injection with clear separation of
//! concerns: the use cases depend on these traits, never on concrete
//! transports or UI code.
//!
//! ## Organization
//!
//! - **http.rs** - POST transport contract and its request/response values
//! - **validation.rs** - Form validation boundary consumed by the presentation layer

/// POST transport contract
pub mod http;
/// Form validation contracts
pub mod validation;

// Re-export commonly used port types for convenience
pub use http::{HttpPostClient, HttpPostParams, HttpResponse, HttpStatusCode};
pub use validation::{FieldValidation, Validation};
