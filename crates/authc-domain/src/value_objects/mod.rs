//! Domain Value Objects
//!
//! Immutable values without identity, defined by their attributes and
//! compared by equality.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`AuthenticationParams`] | Credentials submitted to the account service |

/// Credential value objects
pub mod credentials;

pub use credentials::AuthenticationParams;
