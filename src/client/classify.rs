//! Failure classification: the single decision point for retry policy.
//!
//! Every non-success attempt outcome maps to exactly one of two classes,
//! retriable or terminal. Keeping the policy here means tuning it (for
//! example, treating 429 as retriable with a longer backoff) never
//! touches the orchestrator's state machine.

use super::TransportError;

/// The failure observed on one attempt, after the transport call
/// completed and before the next state transition is chosen.
///
/// Produced fresh per attempt; the orchestrator retains at most the
/// last one for the terminal error.
#[derive(Debug)]
pub enum AttemptFailure {
    /// The transport itself failed (timeout, connection error, ...).
    Transport(TransportError),
    /// The server answered with a non-success status (4xx or 5xx).
    Status {
        /// The status code returned by the server.
        status: http::StatusCode,
        /// The response body, fully buffered.
        body: Vec<u8>,
    },
}

impl AttemptFailure {
    /// Returns a short human-readable summary for observability events.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Transport(e) => e.kind().to_string(),
            Self::Status { status, .. } => status.to_string(),
        }
    }
}

/// Extension trait for checking if a failure is retryable.
///
/// The classification is total and deterministic: every possible
/// transport or HTTP outcome maps to exactly one class.
pub trait IsRetryable {
    /// Returns true if the failure is potentially transient and the
    /// request should be re-issued.
    fn is_retryable(&self) -> bool;
}

impl IsRetryable for TransportError {
    fn is_retryable(&self) -> bool {
        match self {
            // Timeouts and connection failures are typically transient
            Self::Timeout | Self::Connect(_) => true,
            // Anything else is a configuration or protocol issue
            Self::Other(_) => false,
        }
    }
}

impl IsRetryable for AttemptFailure {
    fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_retryable(),
            // 5xx assumes a transient server condition; 4xx is a client
            // error that retrying cannot fix
            Self::Status { status, .. } => status.is_server_error(),
        }
    }
}
