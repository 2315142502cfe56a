//! Retry logic.
//!
//! # Responsibilities
//! - Turn several raw probe readings into one settled reading per cycle
//! - Stop at the first successful reading
//! - Wait a fixed delay between attempts
//!
//! # Design Decisions
//! - Fixed linear delay only: no exponential growth, no jitter
//! - The source is borrowed, never cloned, so retries advance the shared stream
//! - After the last attempt the last observed reading is returned as-is

use std::time::Duration;

use tokio::time::sleep;

use crate::probe::SampleSource;

/// How many readings one cycle may draw and how long to wait between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total readings per sequence, at least 1.
    pub max_attempts: u32,
    /// Pause after each failed reading that is followed by another attempt.
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    /// One initial attempt plus `retries` more.
    pub fn from_retries(retries: u32, delay: Duration) -> Self {
        Self::new(retries.saturating_add(1), delay)
    }
}

/// Result of one retry sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryOutcome {
    /// The settled reading.
    pub reading: bool,
    /// Readings drawn to reach it.
    pub attempts: u32,
}

/// Draw readings from `source` until one is `true` or the attempts run out.
pub async fn retry<S: SampleSource>(source: &mut S, policy: &RetryPolicy) -> RetryOutcome {
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        let reading = source.sample().await;
        if reading || attempt >= max_attempts {
            return RetryOutcome { reading, attempts: attempt };
        }

        tracing::debug!(
            attempt,
            max_attempts,
            delay_secs = policy.delay.as_secs_f64(),
            "Probe failed, retrying"
        );
        sleep(policy.delay).await;
        attempt += 1;
    }
}
