//! Use-Case Boundary Contracts
//!
//! Driving ports: the operations the application layer implements and the
//! presentation layer consumes. Each use case has one entry point with an
//! explicit input/output contract.

/// Authentication use-case port
pub mod authentication;

pub use authentication::Authentication;
