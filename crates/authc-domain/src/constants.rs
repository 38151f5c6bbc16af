//! Domain layer constants
//!
//! Constants that carry business meaning. Infrastructure-specific constants
//! (config file names, environment prefixes) live in `authc_infrastructure`.

// ============================================================================
// FORM FIELDS
// ============================================================================

/// Name of the email field on the login form
pub const FIELD_EMAIL: &str = "email";

/// Name of the password field on the login form
pub const FIELD_PASSWORD: &str = "password";

// ============================================================================
// CREDENTIAL RULES
// ============================================================================

/// Minimum number of characters a password must have
pub const MIN_PASSWORD_LENGTH: usize = 5;

// ============================================================================
// ACCOUNT SERVICE
// ============================================================================

/// Default path of the login endpoint, relative to the API base URL
pub const DEFAULT_LOGIN_PATH: &str = "/login";
