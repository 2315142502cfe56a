//! Monitor loop.
//!
//! # Responsibilities
//! - Take the first raw reading and seed the stability filter
//! - Once per cycle, settle a reading through the retry wrapper
//! - Notify when the smoothed status flips
//!
//! # Design Decisions
//! - One task owns the sample source and the filter; nothing is shared
//! - Notifications are sent inline, so they leave in the order the status changed
//! - A failed notification is logged and monitoring continues
//! - The inter-cycle wait is preempted by the shutdown signal

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time::sleep;

use crate::config::TargetConfig;
use crate::health::state::{LinkStatus, StabilityFilter};
use crate::notify::{message, Notifier};
use crate::probe::SampleSource;
use crate::resilience::retries::{retry, RetryOutcome, RetryPolicy};

/// Frozen settings the monitor runs with.
#[derive(Debug, Clone)]
pub struct MonitorSettings {
    pub device_name: String,
    pub monitor_delay: Duration,
    pub tolerance: u32,
    pub retry: RetryPolicy,
}

impl MonitorSettings {
    pub fn from_target(target: &TargetConfig) -> Self {
        Self {
            device_name: target.device_name.clone(),
            monitor_delay: Duration::from_secs(target.monitor_delay_secs),
            tolerance: target.flip_flop_tolerance,
            retry: RetryPolicy::from_retries(
                target.ping_retries,
                Duration::from_secs(target.ping_retry_delay_secs),
            ),
        }
    }
}

/// What one monitoring cycle observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    pub iteration: u64,
    pub outcome: RetryOutcome,
    pub status: LinkStatus,
    pub changed: bool,
}

pub struct Monitor<S, N> {
    settings: MonitorSettings,
    source: S,
    notifier: Arc<N>,
    filter: StabilityFilter,
    iteration: u64,
}

impl<S: SampleSource, N: Notifier> Monitor<S, N> {
    /// Take the initial reading (no retries), seed the filter and announce the start.
    pub async fn start(settings: MonitorSettings, mut source: S, notifier: Arc<N>) -> Self {
        let first_reading = source.sample().await;
        let filter = StabilityFilter::new(settings.tolerance, first_reading);

        tracing::info!(
            device = %settings.device_name,
            status = %filter.status(),
            window = filter.window().capacity(),
            "Monitoring started"
        );

        let monitor = Self {
            settings,
            source,
            notifier,
            filter,
            iteration: 0,
        };
        monitor
            .notify(message::started(&monitor.settings.device_name, monitor.filter.status()))
            .await;
        monitor
    }

    /// Run one monitoring cycle.
    pub async fn cycle(&mut self) -> CycleReport {
        self.iteration += 1;
        tracing::info!(
            device = %self.settings.device_name,
            iteration = self.iteration,
            "Checking device"
        );

        let outcome = retry(&mut self.source, &self.settings.retry).await;
        self.filter.add(outcome.reading);

        let status = self.filter.status();
        let changed = self.filter.status_changed();
        let window: Vec<bool> = self.filter.window().iter().collect();
        tracing::debug!(
            iteration = self.iteration,
            reading = outcome.reading,
            attempts = outcome.attempts,
            window = ?window,
            changed,
            status = %status,
            "Cycle complete"
        );

        if changed {
            tracing::info!(device = %self.settings.device_name, status = %status, "Status changed");
            self.notify(message::status_changed(&self.settings.device_name, status))
                .await;
        }

        CycleReport {
            iteration: self.iteration,
            outcome,
            status,
            changed,
        }
    }

    /// Repeat cycles until the shutdown signal arrives.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) {
        loop {
            self.cycle().await;

            tokio::select! {
                _ = sleep(self.settings.monitor_delay) => {}
                _ = shutdown.recv() => {
                    tracing::info!("Monitor received shutdown signal, exiting loop");
                    break;
                }
            }
        }
    }

    async fn notify(&self, text: String) {
        if let Err(e) = self.notifier.send(&text).await {
            tracing::error!(error = %e, "Failed to deliver notification");
        }
    }

    pub fn status(&self) -> LinkStatus {
        self.filter.status()
    }

    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    pub fn filter(&self) -> &StabilityFilter {
        &self.filter
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn settings(&self) -> &MonitorSettings {
        &self.settings
    }
}
