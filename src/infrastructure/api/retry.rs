//! Retry with exponential backoff for service requests.

use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;
use tracing::warn;

use crate::domain::errors::ApiError;
use crate::infrastructure::config::RetryConfig;

/// How often and how patiently a failed request is repeated.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    max_attempts: u32,
    initial_interval: Duration,
    multiplier: f64,
    max_interval: Duration,
}

impl RetryPolicy {
    #[must_use]
    pub fn from_config(config: &RetryConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            initial_interval: Duration::from_millis(config.initial_interval_ms),
            multiplier: config.multiplier.max(1.0),
            max_interval: Duration::from_millis(config.max_interval_ms),
        }
    }

    /// Delay before retry number `retry` (1-based), capped at the maximum interval.
    #[must_use]
    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    pub fn delay_for(&self, retry: u32) -> Duration {
        let exponent = retry.saturating_sub(1).min(32) as i32;
        let secs = self.initial_interval.as_secs_f64() * self.multiplier.powi(exponent);
        Duration::try_from_secs_f64(secs)
            .map_or(self.max_interval, |delay| delay.min(self.max_interval))
    }

    /// Runs `request` until it succeeds, fails for good, or attempts run out.
    ///
    /// # Errors
    /// Returns the last error once no further attempt is made.
    pub async fn run<T, F, Fut>(&self, operation: &str, mut request: F) -> Result<T, ApiError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let mut attempt = 1;
        loop {
            let error = match request().await {
                Ok(value) => return Ok(value),
                Err(e) => e,
            };
            if !error.is_retryable() || attempt >= self.max_attempts {
                return Err(error);
            }

            let delay = self.delay_for(attempt);
            warn!(
                operation,
                attempt,
                delay_ms = delay.as_millis(),
                error = %error,
                "Request failed, retrying"
            );
            sleep(delay).await;
            attempt += 1;
        }
    }
}
