//! Stabilized link state.
//!
//! # States
//! - Online: majority of the window reached the host
//! - Offline: majority of the window did not
//!
//! # State Transitions
//! ```text
//! Online → Offline: false readings outnumber true readings in the window
//! Offline → Online: true readings equal or outnumber false readings
//! ```
//!
//! A change is reported for exactly one `add` call: the one whose reading
//! crosses the majority boundary.

use std::fmt;

use crate::health::window::ReachabilityWindow;

/// Smoothed reachability of the monitored host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    Online,
    Offline,
}

impl LinkStatus {
    pub fn is_online(self) -> bool {
        self == LinkStatus::Online
    }
}

impl From<bool> for LinkStatus {
    fn from(reachable: bool) -> Self {
        if reachable {
            LinkStatus::Online
        } else {
            LinkStatus::Offline
        }
    }
}

impl fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkStatus::Online => f.write_str("✅ Online"),
            LinkStatus::Offline => f.write_str("❌ Offline"),
        }
    }
}

/// Majority-vote debouncer over a [`ReachabilityWindow`].
#[derive(Debug, Clone)]
pub struct StabilityFilter {
    window: ReachabilityWindow,
    previous: bool,
    current: bool,
}

impl StabilityFilter {
    /// Seed the filter with its first reading. No change is pending afterwards.
    pub fn new(tolerance: u32, first_reading: bool) -> Self {
        let mut window = ReachabilityWindow::with_tolerance(tolerance);
        window.push(first_reading);
        let smoothed = window.majority();
        Self {
            window,
            previous: smoothed,
            current: smoothed,
        }
    }

    /// Record a settled reading and recompute the smoothed value.
    pub fn add(&mut self, reading: bool) {
        self.window.push(reading);
        self.previous = self.current;
        self.current = self.window.majority();
    }

    /// Current smoothed value.
    pub fn smoothed(&self) -> bool {
        self.current
    }

    pub fn status(&self) -> LinkStatus {
        LinkStatus::from(self.current)
    }

    /// Whether the last `add` flipped the smoothed value.
    pub fn status_changed(&self) -> bool {
        self.previous != self.current
    }

    pub fn window(&self) -> &ReachabilityWindow {
        &self.window
    }
}
