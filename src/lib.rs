//! Host reachability monitor library.

pub mod config;
pub mod health;
pub mod lifecycle;
pub mod notify;
pub mod observability;
pub mod probe;
pub mod resilience;

pub use config::HostWatchConfig;
pub use health::{Monitor, MonitorSettings};
pub use lifecycle::Shutdown;
