//! Retry policy for zone-name lookups.
//!
//! The lookup against the hosted-zone API is the only operation that gets
//! retried; metadata fetch and record publish are single-shot. The policy is a
//! pure function of the attempt number so it can be tested without a clock.

use std::time::Duration;

/// Linear-backoff retry policy.
///
/// Attempt `n` (1-based) sleeps `(n - 1) * step` before running, so the
/// default policy produces the sleep sequence 0s, 2s, 4s, 6s, 8s across five
/// lookups. Defaults are fixed; construction with other values exists for
/// tests, not for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of lookup attempts
    pub max_attempts: u32,

    /// Backoff increment between successive attempts
    pub step: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            step: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    /// Create a policy with explicit limits
    #[must_use]
    pub const fn new(max_attempts: u32, step: Duration) -> Self {
        Self { max_attempts, step }
    }

    /// Sleep to apply before the given 1-based attempt, or `None` once the
    /// attempt budget is spent.
    #[must_use]
    pub fn backoff_before(&self, attempt: u32) -> Option<Duration> {
        if attempt == 0 || attempt > self.max_attempts {
            return None;
        }
        Some(self.step.saturating_mul(attempt - 1))
    }

    /// Total time spent sleeping if every attempt fails
    #[must_use]
    pub fn total_backoff(&self) -> Duration {
        (1..=self.max_attempts)
            .filter_map(|attempt| self.backoff_before(attempt))
            .sum()
    }
}
