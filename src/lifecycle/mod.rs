//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Build probe, notifier, settings → Spawn monitor
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Termination request
//!
//! Shutdown (shutdown.rs):
//!     First request only → Stop monitor → Final notification → Exit 0
//! ```
//!
//! # Design Decisions
//! - Signal handlers are registered before the monitor starts
//! - Shutdown is once-only; repeated signals do not resend the final notification
//! - The monitor's wait between cycles never delays shutdown

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use signals::{TerminationSignal, TerminationSignals};
pub use startup::{build_components, Components, StartupOptions};
