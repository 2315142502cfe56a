//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Monitoring cycle:
//!     → retries.rs (draw readings until one succeeds or attempts run out)
//!     → settled reading handed to the stability filter
//! ```
//!
//! # Design Decisions
//! - A bounded, fixed-delay retry is the only recovery mechanism
//! - Every probe is bounded by its own timeout inside the probe module

pub mod retries;

pub use retries::{retry, RetryOutcome, RetryPolicy};
