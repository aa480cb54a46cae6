//! Retry orchestrator: the state machine wrapping one transport.

use crate::time::{Sleeper, TokioSleeper};

use super::{
    ApiError, AttemptFailure, CancelToken, EventDetail, IsRetryable, Phase, Request, RequestEvent,
    RequestObserver, Response, RetryPolicy, TracingObserver, Transport,
};

/// Orchestrates retries around a single-exchange [`Transport`].
///
/// One call to [`execute`](Orchestrator::execute) is one logical
/// request. Internally it runs an explicit sequential loop: send,
/// classify, back off, send again — never more than
/// [`RetryPolicy::max_attempts`] transport sends, and exactly one
/// terminal outcome. Each call owns its retry state on its own stack
/// frame, so any number of orchestrations can run concurrently over a
/// shared orchestrator without locks.
///
/// Instances are caller-owned and caller-scoped; there is no global
/// client. The transport is an injected capability, which makes the
/// orchestrator testable with scripted transports.
///
/// # Idempotency
///
/// Retried attempts reuse the same request descriptor, including for
/// POST. Whether a POST is safe to re-issue is the caller's
/// responsibility; the orchestrator does not restrict retries to
/// idempotent verbs.
///
/// # Type Parameters
///
/// - `T`: The transport implementation
/// - `S`: The sleeper used for backoff delays (defaults to [`TokioSleeper`])
/// - `O`: The observability hook (defaults to [`TracingObserver`])
///
/// # Example
///
/// ```no_run
/// use sturdy_http::client::{Orchestrator, ReqwestTransport, Request, RetryPolicy};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let orchestrator = Orchestrator::new(ReqwestTransport::new())
///     .with_retry_policy(RetryPolicy::default().with_max_attempts(3));
///
/// let url = Url::parse("https://api.example.com/users/101")?;
/// let response = orchestrator.execute(Request::get(url)).await?;
/// println!("{}", response.body_text().unwrap_or(""));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Orchestrator<T, S = TokioSleeper, O = TracingObserver> {
    transport: T,
    sleeper: S,
    observer: O,
    policy: RetryPolicy,
}

impl<T> Orchestrator<T> {
    /// Creates an orchestrator with the default retry policy,
    /// [`TokioSleeper`] delays, and [`TracingObserver`] events.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            sleeper: TokioSleeper,
            observer: TracingObserver,
            policy: RetryPolicy::default(),
        }
    }
}

impl<T, S, O> Orchestrator<T, S, O> {
    /// Sets a custom sleeper for backoff delays.
    ///
    /// This is primarily useful for testing to avoid actual delays.
    #[must_use]
    pub fn with_sleeper<S2>(self, sleeper: S2) -> Orchestrator<T, S2, O> {
        Orchestrator {
            transport: self.transport,
            sleeper,
            observer: self.observer,
            policy: self.policy,
        }
    }

    /// Sets a custom observability hook.
    #[must_use]
    pub fn with_observer<O2>(self, observer: O2) -> Orchestrator<T, S, O2> {
        Orchestrator {
            transport: self.transport,
            sleeper: self.sleeper,
            observer,
            policy: self.policy,
        }
    }

    /// Sets the retry policy.
    #[must_use]
    pub const fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the configured retry policy.
    #[must_use]
    pub const fn retry_policy(&self) -> &RetryPolicy {
        &self.policy
    }
}

impl<T: Transport, S: Sleeper, O: RequestObserver> Orchestrator<T, S, O> {
    /// Executes one logical request to a terminal outcome.
    ///
    /// Equivalent to [`execute_with_cancel`] with a token that never
    /// fires.
    ///
    /// [`execute_with_cancel`]: Orchestrator::execute_with_cancel
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] once the request is terminally failed:
    /// a 4xx response ([`ApiError::ClientError`], never retried), a 5xx
    /// response after the attempt budget is spent
    /// ([`ApiError::ServerError`]), or a transport failure that is
    /// either non-retriable or has exhausted the budget
    /// ([`ApiError::Transport`]).
    pub async fn execute(&self, request: Request) -> Result<Response, ApiError> {
        self.execute_with_cancel(request, CancelToken::never())
            .await
    }

    /// Executes one logical request, resolving `Canceled` if the token
    /// fires first.
    ///
    /// Cancellation is observed at the two suspension points (the
    /// transport await and the backoff sleep) and between attempts; once
    /// observed, no further transport send is issued and the call
    /// resolves [`ApiError::Canceled`] — never a stale success.
    ///
    /// # Errors
    ///
    /// As [`execute`](Orchestrator::execute), plus [`ApiError::Canceled`].
    pub async fn execute_with_cancel(
        &self,
        request: Request,
        cancel: CancelToken,
    ) -> Result<Response, ApiError> {
        let mut attempt: u32 = 1;

        loop {
            if cancel.is_canceled() {
                return Err(self.resolve_canceled(&request, attempt));
            }

            self.emit(RequestEvent {
                phase: Phase::Sent,
                attempt,
                target: request.url.clone(),
                detail: EventDetail::None,
            });

            // `biased` polls the cancel branch first, so a send is never
            // started once cancellation is observable.
            let outcome = tokio::select! {
                biased;
                () = cancel.canceled() => {
                    return Err(self.resolve_canceled(&request, attempt));
                }
                outcome = self.transport.send(request.clone()) => outcome,
            };

            let failure = match outcome {
                Ok(response) => {
                    self.emit(RequestEvent {
                        phase: Phase::Received,
                        attempt,
                        target: request.url.clone(),
                        detail: EventDetail::Status(response.status),
                    });

                    if response.status.is_client_error() || response.status.is_server_error() {
                        AttemptFailure::Status {
                            status: response.status,
                            body: response.body,
                        }
                    } else {
                        self.emit(RequestEvent {
                            phase: Phase::Resolved,
                            attempt,
                            target: request.url.clone(),
                            detail: EventDetail::Status(response.status),
                        });
                        return Ok(response);
                    }
                }
                Err(e) => {
                    self.emit(RequestEvent {
                        phase: Phase::Received,
                        attempt,
                        target: request.url.clone(),
                        detail: EventDetail::Failure(e.kind().to_string()),
                    });
                    AttemptFailure::Transport(e)
                }
            };

            if !failure.is_retryable() {
                return Err(self.resolve_failed(&request, attempt, failure, false));
            }

            if !self.policy.should_retry(attempt) {
                return Err(self.resolve_failed(&request, attempt, failure, true));
            }

            let delay = self.policy.delay_for_retry(attempt - 1);
            self.emit(RequestEvent {
                phase: Phase::RetryScheduled,
                attempt,
                target: request.url.clone(),
                detail: EventDetail::Backoff(delay),
            });

            tokio::select! {
                biased;
                () = cancel.canceled() => {
                    return Err(self.resolve_canceled(&request, attempt));
                }
                () = self.sleeper.sleep(delay) => {}
            }

            attempt += 1;
        }
    }

    /// Emits one observability event, dropping hook failures.
    fn emit(&self, event: RequestEvent) {
        if let Err(e) = self.observer.on_event(&event) {
            tracing::debug!("Observer error ignored: {e}");
        }
    }

    fn resolve_canceled(&self, request: &Request, attempt: u32) -> ApiError {
        self.emit(RequestEvent {
            phase: Phase::Resolved,
            attempt,
            target: request.url.clone(),
            detail: EventDetail::Failure("canceled".to_string()),
        });
        ApiError::Canceled
    }

    fn resolve_failed(
        &self,
        request: &Request,
        attempts: u32,
        failure: AttemptFailure,
        exhausted: bool,
    ) -> ApiError {
        self.emit(RequestEvent {
            phase: Phase::Resolved,
            attempt: attempts,
            target: request.url.clone(),
            detail: EventDetail::Failure(failure.summary()),
        });

        match failure {
            AttemptFailure::Status { status, body } if exhausted => ApiError::ServerError {
                status,
                body: String::from_utf8(body).ok(),
                attempts,
            },
            AttemptFailure::Status { status, body } => ApiError::ClientError {
                status,
                body: String::from_utf8(body).ok(),
            },
            AttemptFailure::Transport(source) => ApiError::Transport { attempts, source },
        }
    }
}
