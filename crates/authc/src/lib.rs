//! # authc
//!
//! A login client that checks credentials against a remote authentication
//! endpoint and maps the HTTP outcome onto exactly two domain errors:
//! rejected credentials, or everything else.
//!
//! This crate is the public facade: it re-exports the layer crates and the
//! types most callers need, and ships the `authc` binary.
//!
//! ## Example
//!
//! ```no_run
//! use authc::application::RemoteAuthentication;
//! use authc::{Authentication, AuthenticationParams};
//! use authc::providers::{HttpClientConfig, ReqwestHttpPostClient};
//! use std::sync::Arc;
//!
//! # async fn login() -> authc::Result<()> {
//! let transport = Arc::new(ReqwestHttpPostClient::new(HttpClientConfig::default())?);
//! let auth = RemoteAuthentication::new("https://api.example.com/login", transport);
//!
//! let account = auth
//!     .authenticate(AuthenticationParams::new("a@b.com", "123456"))
//!     .await?;
//! println!("{}", account.access_token);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The workspace follows Clean Architecture layering:
//!
//! - `domain` - account model, credentials, errors, and the use-case port
//! - `application` - the remote authentication use case, the HTTP contract,
//!   and the form validation rules
//! - `providers` - the reqwest-backed POST transport
//! - `infrastructure` - configuration, logging, and the composition root
//! - `cli` - the terminal login surface and the `run` entry point

/// Domain layer - core business types and contracts
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use authc_domain::*;
}

/// Application layer - use case, HTTP contract, and validation rules
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use authc_application::*;
}

/// Provider layer - concrete transport adapters
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use authc_providers::*;
}

/// Infrastructure layer - config, logging, and DI
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use authc_infrastructure::*;
}

/// Presentation layer - the terminal login surface
///
/// Re-exports from the cli crate for convenience
pub mod cli {
    pub use authc_cli::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::{AccountModel, Authentication, AuthenticationParams, Error, Result};

// Re-export the main entry point at the crate root
pub use cli::run;
