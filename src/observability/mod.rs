//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events with structured fields (device, status, attempt, ...)
//!
//! Consumers:
//!     → stdout (human-readable or JSON)
//! ```
//!
//! # Design Decisions
//! - Structured logging for machine parsing
//! - No metrics export; the log is the only diagnostic surface

pub mod logging;

pub use logging::init_logging;
