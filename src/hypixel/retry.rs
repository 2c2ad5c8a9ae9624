//! Retry policy with deterministic exponential backoff.
//!
//! The policy is injected into the client rather than hardwired so
//! tests can run with zero delays. Backoff is jitter-free: the wait
//! before attempt N+1 is `base * multiplier^(N-1)`, capped at
//! `max_delay`.

use super::error::{ApiError, FetchError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Backoff schedule knobs for transient-failure retries.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts, including the first.
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub multiplier: f64,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    /// 3 attempts, waiting 2s then 4s, capped at 10s.
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(2),
            multiplier: 2.0,
            max_delay: Duration::from_secs(10),
        }
    }
}

impl RetryPolicy {
    /// A zero-delay policy for tests.
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            base_delay: Duration::ZERO,
            multiplier: 2.0,
            max_delay: Duration::ZERO,
        }
    }

    /// Delay to sleep after failed attempt `attempt` (1-based).
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(i32::MAX as u32) as i32;
        let secs = self.base_delay.as_secs_f64() * self.multiplier.powi(exponent);
        Duration::from_secs_f64(secs.min(self.max_delay.as_secs_f64()))
    }

    /// The full backoff schedule: one delay per retry.
    pub fn delays(&self) -> impl Iterator<Item = Duration> + '_ {
        (1..self.max_attempts.max(1)).map(|attempt| self.delay_after(attempt))
    }
}

/// Cooperative cancellation flag shared between a caller and in-flight
/// fetches. The retry loop checks it between attempts.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Runs `op` under the retry policy.
///
/// Transient failures sleep out the backoff schedule and retry; fatal
/// failures and success return immediately. Exhausting every attempt
/// surfaces the last transient error as `ApiError::Upstream`.
pub(crate) fn with_retries<T>(
    policy: &RetryPolicy,
    cancel: &CancelToken,
    what: &str,
    mut op: impl FnMut() -> Result<T, FetchError>,
) -> Result<T, ApiError> {
    let attempts = policy.max_attempts.max(1);
    let mut last_error = String::new();

    for attempt in 1..=attempts {
        if cancel.is_cancelled() {
            return Err(ApiError::Cancelled);
        }

        match op() {
            Ok(value) => return Ok(value),
            Err(FetchError::Fatal(err)) => return Err(err),
            Err(FetchError::Transient(reason)) => {
                warn!(what, attempt, %reason, "transient failure");
                last_error = reason;
                if attempt < attempts {
                    std::thread::sleep(policy.delay_after(attempt));
                }
            }
        }
    }

    Err(ApiError::Upstream {
        reason: format!("{what} failed after {attempts} attempts: {last_error}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule_doubles_from_two() {
        let policy = RetryPolicy::default();
        let delays: Vec<Duration> = policy.delays().collect();
        assert_eq!(
            delays,
            vec![Duration::from_secs(2), Duration::from_secs(4)]
        );
    }

    #[test]
    fn test_schedule_caps_at_max_delay() {
        let policy = RetryPolicy {
            max_attempts: 6,
            ..RetryPolicy::default()
        };
        let delays: Vec<u64> = policy.delays().map(|d| d.as_secs()).collect();
        // 2, 4, 8, then capped at 10
        assert_eq!(delays, vec![2, 4, 8, 10, 10]);
    }

    #[test]
    fn test_success_on_first_attempt() {
        let policy = RetryPolicy::immediate(3);
        let mut calls = 0;
        let result = with_retries(&policy, &CancelToken::new(), "op", || {
            calls += 1;
            Ok::<_, FetchError>(42)
        });
        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_transient_then_success() {
        let policy = RetryPolicy::immediate(3);
        let mut calls = 0;
        let result = with_retries(&policy, &CancelToken::new(), "op", || {
            calls += 1;
            if calls < 2 {
                Err(FetchError::Transient("timeout".to_string()))
            } else {
                Ok(7)
            }
        });
        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_transient_exhaustion_becomes_upstream() {
        let policy = RetryPolicy::immediate(3);
        let mut calls = 0;
        let result: Result<(), _> = with_retries(&policy, &CancelToken::new(), "profiles", || {
            calls += 1;
            Err(FetchError::Transient("connection reset".to_string()))
        });

        assert_eq!(calls, 3);
        match result {
            Err(ApiError::Upstream { reason }) => {
                assert!(reason.contains("profiles"));
                assert!(reason.contains("3 attempts"));
                assert!(reason.contains("connection reset"));
            }
            other => panic!("expected Upstream, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_fatal_short_circuits() {
        let policy = RetryPolicy::immediate(3);
        let mut calls = 0;
        let result: Result<(), _> = with_retries(&policy, &CancelToken::new(), "op", || {
            calls += 1;
            Err(FetchError::Fatal(ApiError::RateLimited))
        });

        assert_eq!(calls, 1);
        assert!(matches!(result, Err(ApiError::RateLimited)));
    }

    #[test]
    fn test_cancelled_before_first_attempt() {
        let policy = RetryPolicy::immediate(3);
        let cancel = CancelToken::new();
        cancel.cancel();

        let mut calls = 0;
        let result: Result<(), _> = with_retries(&policy, &cancel, "op", || {
            calls += 1;
            Ok(())
        });

        assert_eq!(calls, 0);
        assert!(matches!(result, Err(ApiError::Cancelled)));
    }

    #[test]
    fn test_cancelled_between_attempts() {
        let policy = RetryPolicy::immediate(3);
        let cancel = CancelToken::new();

        let mut calls = 0;
        let cancel_inner = cancel.clone();
        let result: Result<(), _> = with_retries(&policy, &cancel, "op", || {
            calls += 1;
            cancel_inner.cancel();
            Err(FetchError::Transient("timeout".to_string()))
        });

        // First attempt runs, cancellation is noticed before the second
        assert_eq!(calls, 1);
        assert!(matches!(result, Err(ApiError::Cancelled)));
    }

    #[test]
    fn test_zero_attempts_normalizes_to_one() {
        let policy = RetryPolicy::immediate(0);
        let mut calls = 0;
        let result = with_retries(&policy, &CancelToken::new(), "op", || {
            calls += 1;
            Ok::<_, FetchError>(())
        });
        assert!(result.is_ok());
        assert_eq!(calls, 1);
    }
}
