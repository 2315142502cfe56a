//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → HostWatchConfig (validated, immutable)
//!     → MonitorSettings handed to the monitor loop
//! ```
//!
//! # Design Decisions
//! - Config is loaded once at startup and never reloaded
//! - Most fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::HostWatchConfig;
pub use schema::ObservabilityConfig;
pub use schema::ProbeConfig;
pub use schema::ProbeMethod;
pub use schema::TargetConfig;
pub use schema::TelegramConfig;
