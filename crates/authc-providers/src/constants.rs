//! Provider layer constants

// ============================================================================
// HTTP
// ============================================================================

/// JSON content type header value
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Content-Type header name
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
