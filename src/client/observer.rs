//! Observability hook: structured events emitted by the orchestrator.
//!
//! One event per state transition — request sent, response received,
//! retry scheduled, outcome resolved. Emission is fire-and-forget: a
//! failing hook is logged and dropped, never escalated into the
//! orchestration outcome.

use std::time::Duration;

/// The state transition an event describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// An attempt was dispatched to the transport.
    Sent,
    /// The transport call completed (with a status or a failure).
    Received,
    /// A retriable failure was observed and a backoff delay scheduled.
    RetryScheduled,
    /// The orchestration produced its terminal outcome.
    Resolved,
}

/// Phase-specific payload of a [`RequestEvent`].
#[derive(Debug, Clone)]
pub enum EventDetail {
    /// No additional detail (request dispatch).
    None,
    /// The HTTP status code observed.
    Status(http::StatusCode),
    /// A short failure summary (transport kind, terminal error, cancel).
    Failure(String),
    /// The backoff delay before the next attempt.
    Backoff(Duration),
}

/// A structured event describing one orchestration state transition.
#[derive(Debug, Clone)]
pub struct RequestEvent {
    /// Which transition occurred.
    pub phase: Phase,
    /// The attempt number this event belongs to (1 = initial attempt).
    pub attempt: u32,
    /// The request target.
    pub target: url::Url,
    /// Phase-specific detail.
    pub detail: EventDetail,
}

/// Error type a hook may return; always logged and dropped.
pub type ObserverError = Box<dyn std::error::Error + Send + Sync>;

/// Receiver for orchestration events.
///
/// Implementations feed logging or metrics pipelines. They are called
/// inline on the orchestration task and should return quickly; errors
/// they return are ignored by the orchestrator.
pub trait RequestObserver: Send + Sync {
    /// Handles one event.
    ///
    /// # Errors
    ///
    /// Implementations may fail; the orchestrator logs the error at
    /// debug level and continues unaffected.
    fn on_event(&self, event: &RequestEvent) -> Result<(), ObserverError>;
}

/// Default observer that forwards events to `tracing` at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl RequestObserver for TracingObserver {
    fn on_event(&self, event: &RequestEvent) -> Result<(), ObserverError> {
        match (&event.phase, &event.detail) {
            (Phase::Sent, _) => {
                tracing::debug!(attempt = event.attempt, target = %event.target, "Request sent");
            }
            (Phase::Received, EventDetail::Status(status)) => {
                tracing::debug!(
                    attempt = event.attempt,
                    target = %event.target,
                    status = %status,
                    "Response received"
                );
            }
            (Phase::Received, EventDetail::Failure(kind)) => {
                tracing::debug!(
                    attempt = event.attempt,
                    target = %event.target,
                    failure = %kind,
                    "Request failed"
                );
            }
            (Phase::RetryScheduled, EventDetail::Backoff(delay)) => {
                tracing::debug!(
                    attempt = event.attempt,
                    target = %event.target,
                    delay = ?delay,
                    "Retry scheduled"
                );
            }
            (Phase::Resolved, EventDetail::Status(status)) => {
                tracing::debug!(
                    attempt = event.attempt,
                    target = %event.target,
                    status = %status,
                    "Request resolved"
                );
            }
            (Phase::Resolved, EventDetail::Failure(summary)) => {
                tracing::warn!(
                    attempt = event.attempt,
                    target = %event.target,
                    failure = %summary,
                    "Request failed terminally"
                );
            }
            _ => {
                tracing::debug!(
                    attempt = event.attempt,
                    target = %event.target,
                    phase = ?event.phase,
                    "Request event"
                );
            }
        }
        Ok(())
    }
}

/// Observer that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RequestObserver for NoopObserver {
    fn on_event(&self, _event: &RequestEvent) -> Result<(), ObserverError> {
        Ok(())
    }
}
