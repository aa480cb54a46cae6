//! Error types for the request client.

use thiserror::Error;

/// Error produced by a [`Transport`](super::Transport) for a single exchange.
///
/// Describes what went wrong at the network level without dictating
/// recovery strategy; the retry layer decides whether to re-issue.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The attempt did not complete within the per-attempt timeout.
    #[error("Request timed out")]
    Timeout,

    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other connection-level errors.
    #[error("Connection error: {0}")]
    Connect(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Any other transport-level failure.
    ///
    /// Typically a malformed request at the wire level or a protocol
    /// error; treated as a configuration problem rather than a
    /// transient condition.
    #[error("Transport error: {0}")]
    Other(String),
}

impl TransportError {
    /// Returns a short label for the failure kind, suitable for
    /// structured log fields and observability events.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::Connect(_) => "connect",
            Self::Other(_) => "other",
        }
    }
}

/// Terminal outcome error surfaced to callers.
///
/// Exactly one of these (or a successful response) is produced per
/// orchestration call. Intermediate attempts are never exposed; the
/// variants for exhausted retries carry the attempt count so the root
/// cause stays diagnosable.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The caller supplied a malformed operation (bad URL, missing
    /// required body). Surfaced immediately, never retried.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The server answered with a 4xx status. Not retried; retrying a
    /// client error cannot help.
    #[error("Client error: {status}: {}", .body.as_deref().unwrap_or("<no body>"))]
    ClientError {
        /// The 4xx status returned by the server.
        status: http::StatusCode,
        /// Response body, when it was valid UTF-8.
        body: Option<String>,
    },

    /// The server answered 5xx on every attempt until the budget ran out.
    #[error("Server error after {attempts} attempt(s): {status}: {}", .body.as_deref().unwrap_or("<no body>"))]
    ServerError {
        /// The status observed on the final attempt.
        status: http::StatusCode,
        /// Final response body, when it was valid UTF-8.
        body: Option<String>,
        /// Total transport sends made.
        attempts: u32,
    },

    /// The transport failed on every attempt until the budget ran out,
    /// or failed in a way that is never retried.
    #[error("Transport failed after {attempts} attempt(s)")]
    Transport {
        /// Total transport sends made.
        attempts: u32,
        /// The failure observed on the final attempt.
        #[source]
        source: TransportError,
    },

    /// The caller withdrew interest before a result was produced.
    #[error("Request canceled")]
    Canceled,

    /// A successful response body could not be decoded into the
    /// requested type.
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}
