//! Presentation Layer - authc
//!
//! The terminal login surface of the authc client: form state, the
//! submission flow, the interactive screen, and the `run` entry point the
//! binary delegates to.
//!
//! ## Architecture
//!
//! This layer consumes exactly two boundaries from the inner layers:
//!
//! - [`Authentication`](authc_domain::usecases::Authentication) - the
//!   credential check itself
//! - [`Validation`](authc_application::ports::validation::Validation) -
//!   per-field form validation
//!
//! It distinguishes rejected credentials from every other failure to
//! render a field-specific versus a generic message; nothing finer than
//! that split exists here.

/// Login submission flow and its outcomes
pub mod flow;
/// Login form state
pub mod form;
/// Entry point wiring config, logging, and the object graph
pub mod init;
/// Interactive prompt loop
pub mod screen;

pub use flow::{GENERIC_FAILURE_MESSAGE, INVALID_CREDENTIALS_MESSAGE, LoginFlow, LoginOutcome};
pub use form::LoginForm;
pub use init::run;
pub use screen::LoginScreen;
