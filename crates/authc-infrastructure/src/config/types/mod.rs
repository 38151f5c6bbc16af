//! Configuration types module

pub mod api;
pub mod app;
pub mod logging;

// Re-export main types
pub use api::ApiConfig;
pub use app::AppConfig;
pub use logging::LoggingConfig;
