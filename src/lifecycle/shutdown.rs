//! Shutdown coordination for the monitor.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::lifecycle::signals::TerminationSignal;
use crate::notify::{message, Notifier};

/// Coordinator for graceful shutdown.
///
/// Provides a broadcast channel that long-running tasks subscribe to, and a
/// once-only trigger so a second termination request cannot repeat the
/// shutdown sequence.
pub struct Shutdown {
    /// Broadcast channel sender.
    tx: broadcast::Sender<()>,
    /// Set by the first trigger.
    triggered: AtomicBool,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self {
            tx,
            triggered: AtomicBool::new(false),
        }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal.
    ///
    /// Returns `true` only for the call that actually started the shutdown.
    pub fn trigger(&self) -> bool {
        if self.triggered.swap(true, Ordering::SeqCst) {
            return false;
        }
        let _ = self.tx.send(());
        true
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered.load(Ordering::SeqCst)
    }

    /// Run the termination sequence for `signal`.
    ///
    /// Only the first call acts: it stops the monitor task, waits for it to
    /// finish, then sends the final notification so that message is the last
    /// one delivered. Returns whether this call performed the sequence.
    pub async fn terminate<N: Notifier>(
        &self,
        monitor: JoinHandle<()>,
        notifier: &N,
        device: &str,
        signal: TerminationSignal,
    ) -> bool {
        if !self.trigger() {
            tracing::debug!(%signal, "Shutdown already in progress");
            return false;
        }
        tracing::info!(%signal, "Termination requested");

        monitor.abort();
        let _ = monitor.await;

        if let Err(e) = notifier.send(&message::terminating(device, signal)).await {
            tracing::error!(error = %e, "Failed to deliver shutdown notification");
        }
        true
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
