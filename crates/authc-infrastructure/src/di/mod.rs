//! Dependency Injection
//!
//! The composition root for the login client. All dependencies are
//! injected as `Arc<dyn Trait>`; this module contains only wiring logic,
//! never business rules.

pub mod bootstrap;

pub use bootstrap::{AppContext, init_app, init_test_app, login_validation};
