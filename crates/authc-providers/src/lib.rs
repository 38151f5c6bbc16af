//! Provider Implementations - authc
//!
//! Concrete adapters for the application layer's boundary contracts. Today
//! that is a single adapter: the reqwest-backed POST transport behind
//! [`authc_application::ports::http::HttpPostClient`].
//!
//! ## Architecture
//!
//! Providers depend on the application layer for the contracts they
//! implement and on the domain layer for errors. Nothing in here is
//! consumed directly by use cases; the infrastructure crate wires these
//! adapters in at composition time.

/// Provider-level constants
pub mod constants;
/// HTTP transport adapter
pub mod http;

pub use http::{HttpClientConfig, ReqwestHttpPostClient};
