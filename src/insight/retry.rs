//! Bounded retry policy for the insight collaborator.

use core::time::Duration;

use super::InsightError;

/// How many times, and how patiently, a retryable failure is retried.
///
/// Only errors for which [`InsightError::is_retryable`] holds are retried.
/// The wait grows linearly: `base_delay × retry`.
///
/// # Examples
///
/// ```
/// use core::time::Duration;
/// use tokenomics_amm::insight::RetryPolicy;
///
/// let policy = RetryPolicy::default();
/// assert_eq!(policy.max_retries(), 2);
/// assert_eq!(policy.delay_for(1), Duration::from_secs(2));
/// assert_eq!(policy.delay_for(2), Duration::from_secs(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_retries: u32,
    base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_delay: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    /// Creates a policy.
    #[must_use]
    pub const fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
        }
    }

    /// A policy that never retries.
    #[must_use]
    pub const fn never() -> Self {
        Self::new(0, Duration::ZERO)
    }

    /// Returns the maximum number of retries after the first attempt.
    #[must_use]
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Returns the total attempt budget (first attempt plus retries).
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Returns `true` if `error` should be retried after `retries_done`
    /// retries.
    #[must_use]
    pub const fn should_retry(&self, retries_done: u32, error: &InsightError) -> bool {
        retries_done < self.max_retries && error.is_retryable()
    }

    /// Returns the wait before retry number `retry` (1-based).
    #[must_use]
    pub fn delay_for(&self, retry: u32) -> Duration {
        self.base_delay
            .checked_mul(retry)
            .unwrap_or(Duration::MAX)
    }
}
