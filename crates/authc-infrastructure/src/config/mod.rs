//! Configuration module
//!
//! Figment-based configuration with defaults, TOML file, and environment
//! variable layers.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{ApiConfig, AppConfig, LoggingConfig};
