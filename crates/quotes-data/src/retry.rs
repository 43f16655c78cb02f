//! Bounded retry policy for download attempts.

use quotes_core::error::DataError;
use std::fmt;
use std::time::Duration;

/// Delay schedule between failed attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backoff {
    /// Sleep `step * failures` after each failure.
    Linear { step: Duration },
    /// Retry immediately.
    None,
}

/// How many times to try, how long to wait, and which errors qualify.
#[derive(Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: Backoff,
    retryable: fn(&DataError) -> bool,
}

impl RetryPolicy {
    /// Linear backoff retrying transient errors.
    pub fn linear(max_attempts: u32, step: Duration) -> Self {
        Self {
            max_attempts,
            backoff: Backoff::Linear { step },
            retryable: DataError::is_transient,
        }
    }

    /// Retry transient errors without sleeping.
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            backoff: Backoff::None,
            retryable: DataError::is_transient,
        }
    }

    /// Replace the retryable-error predicate.
    pub fn with_predicate(mut self, retryable: fn(&DataError) -> bool) -> Self {
        self.retryable = retryable;
        self
    }

    /// Delay after the `failures`-th failed attempt (1-based).
    pub fn delay_for(&self, failures: u32) -> Duration {
        match self.backoff {
            Backoff::Linear { step } => step.saturating_mul(failures),
            Backoff::None => Duration::ZERO,
        }
    }

    /// Whether a failed attempt may be retried.
    pub fn should_retry(&self, err: &DataError) -> bool {
        (self.retryable)(err)
    }
}

impl fmt::Debug for RetryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryPolicy")
            .field("max_attempts", &self.max_attempts)
            .field("backoff", &self.backoff)
            .finish_non_exhaustive()
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::linear(5, Duration::from_secs(2))
    }
}
