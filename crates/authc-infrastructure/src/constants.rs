//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `authc_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "authc.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "authc";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "AUTHC";

/// Separator between nesting levels in environment variable names
///
/// Double underscore keeps single underscores available inside key names,
/// so `AUTHC_API__BASE_URL` maps to `api.base_url`.
pub const ENV_NESTED_SEPARATOR: &str = "__";

// ============================================================================
// ACCOUNT SERVICE CONSTANTS
// ============================================================================

/// Default base URL of the account service
pub const DEFAULT_API_BASE_URL: &str = "https://api.example.com";

/// Default request timeout in seconds
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable consulted for log filter overrides
pub const LOG_ENV_VAR: &str = "AUTHC_LOG";
