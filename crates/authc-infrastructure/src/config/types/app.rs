//! Main application configuration

use serde::{Deserialize, Serialize};

pub use super::api::ApiConfig;
pub use super::logging::LoggingConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Account service configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
