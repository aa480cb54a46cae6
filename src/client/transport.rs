//! Transport seam: response type and the single-exchange client trait.

use super::{Request, TransportError};

/// An HTTP response received from a server.
///
/// Contains the status code, headers, and body of the response.
/// The body is fully buffered into memory.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Response headers
    pub headers: http::HeaderMap,
    /// Response body (fully buffered)
    pub body: Vec<u8>,
}

impl Response {
    /// Creates a new HTTP response.
    #[must_use]
    pub const fn new(status: http::StatusCode, headers: http::HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the body as a UTF-8 string, if valid.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

/// Trait for performing exactly one network exchange.
///
/// # Design
///
/// The retry orchestrator consumes this as an injected capability, which
/// enables:
/// - Substituting scripted transports in tests without subclass hooks
/// - Swapping HTTP libraries without touching the retry logic
/// - Adding cross-cutting concerns via decorators
///
/// One call to [`send`](Transport::send) corresponds to one attempt on
/// the wire; implementations must not retry internally. Connection
/// pooling, if any, lives entirely behind this trait.
///
/// # Example
///
/// ```ignore
/// use sturdy_http::client::{Transport, Request, Response, TransportError};
///
/// struct FixedTransport {
///     response: Response,
/// }
///
/// impl Transport for FixedTransport {
///     async fn send(&self, _req: Request) -> Result<Response, TransportError> {
///         Ok(self.response.clone())
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    /// Performs one exchange: sends the request and returns the response.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when:
    /// - The per-attempt timeout elapses ([`TransportError::Timeout`])
    /// - The connection cannot be established ([`TransportError::Connect`])
    /// - Any other wire-level failure occurs ([`TransportError::Other`])
    fn send(
        &self,
        req: Request,
    ) -> impl std::future::Future<Output = Result<Response, TransportError>> + Send;
}
