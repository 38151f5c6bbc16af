//! HTTP transport adapter
//!
//! The production implementation of the application layer's POST contract,
//! plus its configuration type.

/// Reqwest-backed transport
pub mod client;
/// Client pool and timeout configuration
pub mod config;

pub use client::ReqwestHttpPostClient;
pub use config::HttpClientConfig;
