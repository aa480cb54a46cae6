//! Retry policy configuration.

use std::time::Duration;

/// Configuration for bounded retry behavior with backoff.
///
/// Controls how many transport sends one orchestration call may make
/// and how long to wait between them. The delay schedule is exponential
/// with a configurable multiplier and cap; [`RetryPolicy::fixed`] gives
/// a constant delay.
///
/// `max_attempts` is the **total send budget** for one logical request,
/// including the initial attempt. The default of 3 means one initial
/// send plus up to two retries.
///
/// # Example
///
/// ```
/// use sturdy_http::client::RetryPolicy;
/// use std::time::Duration;
///
/// // Default: 3 attempts, 1 s initial delay, doubling, capped at 30 s
/// let policy = RetryPolicy::default();
///
/// // Or customize via builder
/// let custom = RetryPolicy::new()
///     .with_max_attempts(5)
///     .with_initial_delay(Duration::from_millis(500))
///     .with_max_delay(Duration::from_secs(10))
///     .with_multiplier(1.5);
///
/// // Constant one-second delay between attempts
/// let fixed = RetryPolicy::fixed(Duration::from_secs(1));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the initial attempt).
    ///
    /// A value of 1 means no retries; only the initial attempt is made.
    pub max_attempts: u32,

    /// Delay before the first retry.
    ///
    /// Subsequent delays are computed by multiplying by `multiplier`.
    pub initial_delay: Duration,

    /// Maximum delay between retries; the computed delay is capped here.
    pub max_delay: Duration,

    /// Multiplier applied to the delay after each retry.
    pub multiplier: f64,
}

impl RetryPolicy {
    /// Default maximum attempts.
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

    /// Default initial delay (1 second).
    pub const DEFAULT_INITIAL_DELAY: Duration = Duration::from_secs(1);

    /// Default maximum delay (30 seconds).
    pub const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(30);

    /// Default multiplier (2.0).
    pub const DEFAULT_MULTIPLIER: f64 = 2.0;

    /// Minimum value for `max_attempts`.
    pub const MIN_MAX_ATTEMPTS: u32 = 1;

    /// Creates a new retry policy with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            initial_delay: Self::DEFAULT_INITIAL_DELAY,
            max_delay: Self::DEFAULT_MAX_DELAY,
            multiplier: Self::DEFAULT_MULTIPLIER,
        }
    }

    /// Creates a policy with a constant delay between attempts.
    ///
    /// Zero delay is supported (useful for testing with
    /// [`InstantSleeper`]) but not recommended for production as it
    /// creates a tight retry loop.
    ///
    /// [`InstantSleeper`]: crate::time::InstantSleeper
    #[must_use]
    pub const fn fixed(delay: Duration) -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            initial_delay: delay,
            max_delay: delay,
            multiplier: 1.0,
        }
    }

    /// Sets the maximum number of attempts.
    ///
    /// # Panics
    ///
    /// Panics if `max_attempts` is less than 1.
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        assert!(
            max_attempts >= Self::MIN_MAX_ATTEMPTS,
            "max_attempts must be at least 1"
        );
        self.max_attempts = max_attempts;
        self
    }

    /// Sets the initial delay between retries.
    #[must_use]
    pub const fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Sets the maximum delay between retries.
    #[must_use]
    pub const fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Sets the delay multiplier.
    ///
    /// # Panics
    ///
    /// Panics if `multiplier` is not positive (must be > 0.0).
    #[must_use]
    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        assert!(multiplier > 0.0, "multiplier must be positive");
        self.multiplier = multiplier;
        self
    }

    /// Computes the delay for a given retry number (0-indexed).
    ///
    /// Retry 0 is the delay before the second attempt. The computed
    /// delay is capped at `max_delay`.
    #[must_use]
    pub fn delay_for_retry(&self, retry: u32) -> Duration {
        // Safe cast: retry values are small (typically < 20)
        #[allow(clippy::cast_possible_wrap)]
        let multiplier = self.multiplier.powi(retry as i32);
        let delay_secs = self.initial_delay.as_secs_f64() * multiplier;
        let capped = delay_secs.min(self.max_delay.as_secs_f64());
        Duration::from_secs_f64(capped)
    }

    /// Returns true if another attempt is allowed after attempt number
    /// `attempt` (1 = the initial attempt) has failed.
    #[must_use]
    pub const fn should_retry(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new()
    }
}
