//! Use case implementations

/// Remote authentication against the account service
pub mod remote_authentication;

pub use remote_authentication::{AuthenticationHttpClient, RemoteAuthentication};
