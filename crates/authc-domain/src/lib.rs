//! Domain layer for the authc login client
//!
//! Core business types and contracts, free of transport and UI concerns:
//!
//! - `entities` - records with identity produced by the system ([`AccountModel`])
//! - `value_objects` - immutable input values ([`AuthenticationParams`])
//! - `usecases` - driving ports the application layer implements
//! - `error` - the domain error taxonomy and `Result` alias
//!
//! Outer layers depend on this crate; this crate depends on nothing but
//! serialization and error-handling libraries.

/// Domain-wide constants
pub mod constants;
/// Entities produced by the system
pub mod entities;
/// Error handling types
pub mod error;
/// Use-case boundary contracts
pub mod usecases;
/// Immutable domain value objects
pub mod value_objects;

// Re-export commonly used types at the crate root
pub use entities::AccountModel;
pub use error::{Error, Result};
pub use usecases::Authentication;
pub use value_objects::AuthenticationParams;
