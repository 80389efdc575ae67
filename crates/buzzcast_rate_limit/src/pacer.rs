//! Minimum-interval request pacer built on governor.

use crate::PacingConfig;
use buzzcast_error::RetryableError;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as GovernorRateLimiter};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{debug, warn};

type DirectRateLimiter = GovernorRateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Serializes outbound calls with a minimum interval between them.
///
/// Cloning shares the underlying limiter, so every clone paces against the
/// same "last request" state.
///
/// # Examples
///
/// ```
/// use buzzcast_rate_limit::RequestPacer;
/// use std::time::Duration;
///
/// let rt = tokio::runtime::Runtime::new().unwrap();
/// rt.block_on(async {
///     let pacer = RequestPacer::new(Duration::from_millis(10));
///     pacer.wait().await; // immediate
///     pacer.wait().await; // waits ~10ms
/// });
/// ```
#[derive(Clone, Debug)]
pub struct RequestPacer {
    limiter: Option<Arc<DirectRateLimiter>>,
    min_interval: Duration,
}

impl RequestPacer {
    /// Create a pacer; a zero interval never waits.
    pub fn new(min_interval: Duration) -> Self {
        let limiter = Quota::with_period(min_interval)
            .map(|quota| Arc::new(GovernorRateLimiter::direct(quota)));
        Self {
            limiter,
            min_interval,
        }
    }

    /// Create a pacer from configuration.
    pub fn from_config(config: &PacingConfig) -> Self {
        Self::new(config.min_interval())
    }

    /// A pacer that never waits.
    pub fn unpaced() -> Self {
        Self::new(Duration::ZERO)
    }

    /// The configured interval.
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Suspend until the next request may go out.
    pub async fn wait(&self) {
        if let Some(limiter) = &self.limiter {
            if limiter.check().is_err() {
                debug!(interval_ms = self.min_interval.as_millis() as u64, "Pacing request");
                limiter.until_ready().await;
            }
        }
    }

    /// Run `operation` paced, retrying transient errors with backoff.
    ///
    /// Makes at most `1 + max_retries` calls. Backoff parameters come from the
    /// first error's [`RetryableError::retry_strategy_params`], whose retry
    /// count also caps the attempts. Every retry, including the first, waits
    /// out one backoff delay. Permanent errors return immediately.
    pub async fn execute<F, Fut, R, E>(&self, max_retries: usize, operation: F) -> Result<R, E>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<R, E>>,
        E: RetryableError + std::fmt::Display,
    {
        use tokio_retry2::strategy::{ExponentialBackoff, jitter};
        use tokio_retry2::{Retry, RetryError};

        self.wait().await;
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(e) if !e.is_retryable() || max_retries == 0 => return Err(e),
            Err(e) => e,
        };

        let (backoff_ms, strategy_retries, max_delay_secs) = err.retry_strategy_params();
        warn!(error = %err, "Transient error, will retry");

        let retry_strategy = ExponentialBackoff::from_millis(backoff_ms)
            .factor(2)
            .max_delay(Duration::from_secs(max_delay_secs))
            .map(jitter)
            .take(strategy_retries.min(max_retries));

        // Retry::spawn attempts immediately; replaying the first error there
        // puts a backoff delay in front of the second real call.
        let replay = Mutex::new(Some(err));
        let replay = &replay;
        let operation = &operation;

        Retry::spawn(retry_strategy, move || async move {
            let pending = replay.lock().ok().and_then(|mut slot| slot.take());
            if let Some(err) = pending {
                return Err(RetryError::Transient {
                    err,
                    retry_after: None,
                });
            }

            self.wait().await;
            match operation().await {
                Ok(value) => Ok(value),
                Err(e) if e.is_retryable() => {
                    warn!(error = %e, "Transient error, will retry");
                    Err(RetryError::Transient {
                        err: e,
                        retry_after: None,
                    })
                }
                Err(e) => {
                    warn!(error = %e, "Permanent error, failing immediately");
                    Err(RetryError::Permanent(e))
                }
            }
        })
        .await
    }
}
