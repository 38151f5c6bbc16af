//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and domain
//! layers of the authc login client.
//!
//! ## Module Categories
//!
//! ### Configuration & DI
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based TOML + environment configuration |
//! | [`di`] | Composition root wiring the use case and its collaborators |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//!
//! ### Error Handling
//! | Module | Description |
//! |--------|-------------|
//! | [`error_ext`] | Context extension methods for domain errors |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use config::{ApiConfig, AppConfig, ConfigLoader, LoggingConfig};
pub use di::{AppContext, init_app};
pub use error_ext::ErrorContext;
