//! Account service endpoint configuration

use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_API_TIMEOUT_SECS};
use authc_domain::constants::DEFAULT_LOGIN_PATH;
use serde::{Deserialize, Serialize};

/// Account service endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the account service
    pub base_url: String,

    /// Path of the login endpoint, relative to the base URL
    pub login_path: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Absolute URL of the login endpoint
    ///
    /// Joins base URL and path without duplicating the slash between them.
    pub fn login_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.login_path.trim_start_matches('/')
        )
    }
}
