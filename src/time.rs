//! Time abstraction for testability.
//!
//! This module provides a [`Sleeper`] trait that allows injecting
//! zero-delay sleeps in tests while using real timers in production.

use std::time::Duration;

/// Abstraction over asynchronous delays for testability.
///
/// The retry orchestrator sleeps between attempts through this trait,
/// so tests can substitute [`InstantSleeper`] and exercise multi-attempt
/// scenarios without real waiting.
///
/// # Example
///
/// ```
/// use sturdy_http::time::{Sleeper, TokioSleeper};
/// use std::time::Duration;
///
/// # async fn example() {
/// let sleeper = TokioSleeper;
/// sleeper.sleep(Duration::from_millis(1)).await;
/// # }
/// ```
pub trait Sleeper: Send + Sync {
    /// Suspends the current task for the given duration.
    ///
    /// Implementations must yield to the scheduler rather than block
    /// the worker thread.
    fn sleep(&self, duration: Duration) -> impl std::future::Future<Output = ()> + Send;
}

/// Production sleeper backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Sleeper that returns immediately regardless of the requested duration.
///
/// Intended for tests that exercise retry paths without incurring
/// real delays.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantSleeper;

impl Sleeper for InstantSleeper {
    async fn sleep(&self, _duration: Duration) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn tokio_sleeper_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TokioSleeper>();
    }

    #[test]
    fn instant_sleeper_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InstantSleeper>();
    }

    #[tokio::test]
    async fn instant_sleeper_does_not_wait() {
        let start = Instant::now();
        InstantSleeper.sleep(Duration::from_secs(60)).await;
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_sleeper_honors_duration() {
        let start = tokio::time::Instant::now();
        TokioSleeper.sleep(Duration::from_secs(5)).await;
        assert_eq!(start.elapsed(), Duration::from_secs(5));
    }

    #[test]
    fn sleepers_are_copy() {
        let a = TokioSleeper;
        let b = a;
        let _ = (a, b);

        let c = InstantSleeper;
        let d = c;
        let _ = (c, d);
    }
}
