//! Caller-side cancellation for in-flight orchestrations.

use tokio::sync::watch;

/// Handle the caller keeps to withdraw interest in one or more
/// orchestration calls.
///
/// Dropping the source without calling [`cancel`](CancelSource::cancel)
/// never cancels anything; outstanding tokens simply become inert.
#[derive(Debug)]
pub struct CancelSource {
    tx: watch::Sender<bool>,
}

impl CancelSource {
    /// Creates a new, un-canceled source.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx }
    }

    /// Creates a token observing this source.
    ///
    /// Tokens are cheap to clone and share across tasks.
    #[must_use]
    pub fn token(&self) -> CancelToken {
        CancelToken {
            rx: self.tx.subscribe(),
        }
    }

    /// Signals cancellation to every outstanding token.
    ///
    /// Idempotent; later calls have no further effect.
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }
}

impl Default for CancelSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Observer side of a [`CancelSource`].
///
/// The orchestrator polls this at each suspension point (the transport
/// await and the backoff sleep) and resolves `Canceled` once it fires.
#[derive(Debug, Clone)]
pub struct CancelToken {
    rx: watch::Receiver<bool>,
}

impl CancelToken {
    /// Creates a token that can never be canceled.
    #[must_use]
    pub fn never() -> Self {
        let (tx, rx) = watch::channel(false);
        drop(tx);
        Self { rx }
    }

    /// Returns true if cancellation has been signaled.
    #[must_use]
    pub fn is_canceled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once cancellation is signaled.
    ///
    /// If the source is dropped without canceling, the future stays
    /// pending forever.
    pub async fn canceled(&self) {
        let mut rx = self.rx.clone();
        loop {
            if *rx.borrow_and_update() {
                return;
            }
            if rx.changed().await.is_err() {
                // Source dropped without canceling
                std::future::pending::<()>().await;
            }
        }
    }
}
