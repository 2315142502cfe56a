//! Host health subsystem.
//!
//! # Data Flow
//! ```text
//! monitor.rs:
//!     initial reading → StabilityFilter::new
//!     every cycle: retry wrapper → StabilityFilter::add
//!     → status_changed? → notify
//!
//! state.rs:
//!     Online ←→ Offline
//!     Majority vote over window.rs to prevent flapping
//! ```
//!
//! # Design Decisions
//! - Window holds `2 * tolerance + 1` settled readings
//! - Balanced windows read online
//! - Single host, single task, no history across restarts

pub mod monitor;
pub mod state;
pub mod window;

pub use monitor::{CycleReport, Monitor, MonitorSettings};
pub use state::{LinkStatus, StabilityFilter};
pub use window::ReachabilityWindow;
