//! HTTP boundary contract
//!
//! The minimal POST surface the application layer needs from an HTTP
//! transport. The concrete adapter lives in the providers crate; tests
//! substitute hand-rolled spies.

use async_trait::async_trait;
use authc_domain::error::Result;
use std::fmt;

/// HTTP status code as reported by a transport
///
/// A thin wrapper instead of a closed enum so every code a server can
/// return stays representable. The named constants cover the codes this
/// client distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HttpStatusCode(pub u16);

impl HttpStatusCode {
    /// 200 OK
    pub const OK: HttpStatusCode = HttpStatusCode(200);
    /// 204 No Content
    pub const NO_CONTENT: HttpStatusCode = HttpStatusCode(204);
    /// 400 Bad Request
    pub const BAD_REQUEST: HttpStatusCode = HttpStatusCode(400);
    /// 401 Unauthorized
    pub const UNAUTHORIZED: HttpStatusCode = HttpStatusCode(401);
    /// 404 Not Found
    pub const NOT_FOUND: HttpStatusCode = HttpStatusCode(404);
    /// 500 Internal Server Error
    pub const SERVER_ERROR: HttpStatusCode = HttpStatusCode(500);

    /// Raw numeric code
    pub fn as_u16(self) -> u16 {
        self.0
    }

    /// Whether the code is in the 2xx success range
    pub fn is_success(self) -> bool {
        (200..300).contains(&self.0)
    }
}

impl fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        HttpStatusCode(code)
    }
}

/// Input to a POST call: target URL plus an optional body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpPostParams<B> {
    /// Absolute URL of the endpoint
    pub url: String,
    /// Request body; omitted from the request when `None`
    pub body: Option<B>,
}

/// An HTTP response as seen through the contract
///
/// Any status code is a response, not an error. `body` is `None` when the
/// transport could not produce a value of `R` from the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse<R> {
    /// Status code returned by the server
    pub status_code: HttpStatusCode,
    /// Decoded response body, when one was present and well-formed
    pub body: Option<R>,
}

/// POST transport contract
///
/// `Err` is reserved for transport-level failures (connect, timeout,
/// malformed URL). A response carrying a non-success status code is
/// still `Ok`; interpreting the code is the caller's job.
#[async_trait]
pub trait HttpPostClient<B, R>: Send + Sync
where
    B: Send + 'static,
    R: Send + 'static,
{
    /// Issue a POST request and await the response
    async fn post(&self, params: HttpPostParams<B>) -> Result<HttpResponse<R>>;
}
