//! Bounded retry with exponential backoff and jitter

use rand::Rng;
use std::future::Future;
use std::time::Duration;

use super::{config::RetryConfig, error::LlmError};

fn next_delay(current: Duration, config: &RetryConfig) -> Duration {
    if current >= config.max_delay {
        return config.max_delay;
    }
    let multiplier = config.backoff_multiplier.max(1.0) as f64;
    Duration::from_secs_f64(current.as_secs_f64() * multiplier).min(config.max_delay)
}

/// Adds up to half of `delay` on top of it
fn with_jitter(delay: Duration) -> Duration {
    let half = delay.as_millis() as u64 / 2;
    if half == 0 {
        return delay;
    }
    delay + Duration::from_millis(rand::thread_rng().gen_range(0..=half))
}

/// Run `operation`, retrying retryable failures up to `config.max_retries` times
pub async fn execute_with_retry<T, Op, Fut>(config: &RetryConfig, mut operation: Op) -> Result<T, LlmError>
where
    Op: FnMut() -> Fut,
    Fut: Future<Output = Result<T, LlmError>>,
{
    let mut attempt: u32 = 0;
    let mut delay = config.initial_delay;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(error) if attempt < config.max_retries && error.is_retryable() => {
                attempt += 1;
                let wait = with_jitter(delay);
                tracing::warn!(
                    attempt,
                    max_retries = config.max_retries,
                    delay_ms = wait.as_millis() as u64,
                    error = %error,
                    "upstream call failed with retryable error; retrying"
                );
                tokio::time::sleep(wait).await;
                delay = next_delay(delay, config);
            }
            Err(error) => return Err(error),
        }
    }
}
