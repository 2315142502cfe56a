//! Configuration validation.
//!
//! Serde handles syntax; this module checks value ranges and the
//! relationships between fields. Every problem is reported, not just the
//! first, and validation runs before the config reaches the monitor.

use thiserror::Error;
use url::Url;

use crate::config::schema::{HostWatchConfig, ProbeMethod};

/// Largest accepted `flip_flop_tolerance`.
pub const MAX_FLIP_FLOP_TOLERANCE: u32 = 10_000;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("target.host must not be empty")]
    EmptyHost,

    #[error("target.device_name must not be empty")]
    EmptyDeviceName,

    #[error("target.monitor_delay_secs must be greater than zero")]
    ZeroMonitorDelay,

    #[error("target.flip_flop_tolerance must be at most {max}, got {0}", max = MAX_FLIP_FLOP_TOLERANCE)]
    ToleranceTooLarge(u32),

    #[error("target.probe.timeout_secs must be greater than zero")]
    ZeroProbeTimeout,

    #[error("target.probe.port is required for tcp probes")]
    MissingTcpPort,

    #[error("telegram.{0} must not be empty")]
    EmptyTelegramField(&'static str),

    #[error("telegram.api_base_url is not a valid URL: {0}")]
    InvalidApiBaseUrl(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &HostWatchConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let target = &config.target;

    if target.host.trim().is_empty() {
        errors.push(ValidationError::EmptyHost);
    }
    if target.device_name.trim().is_empty() {
        errors.push(ValidationError::EmptyDeviceName);
    }
    if target.monitor_delay_secs == 0 {
        errors.push(ValidationError::ZeroMonitorDelay);
    }
    if target.flip_flop_tolerance > MAX_FLIP_FLOP_TOLERANCE {
        errors.push(ValidationError::ToleranceTooLarge(target.flip_flop_tolerance));
    }
    if target.probe.timeout_secs == 0 {
        errors.push(ValidationError::ZeroProbeTimeout);
    }
    if target.probe.method == ProbeMethod::Tcp && target.probe.port.is_none() {
        errors.push(ValidationError::MissingTcpPort);
    }

    if let Some(telegram) = &config.telegram {
        if telegram.api_token.trim().is_empty() {
            errors.push(ValidationError::EmptyTelegramField("api_token"));
        }
        if telegram.channel_id.trim().is_empty() {
            errors.push(ValidationError::EmptyTelegramField("channel_id"));
        }
        if let Err(e) = Url::parse(&telegram.api_base_url) {
            errors.push(ValidationError::InvalidApiBaseUrl(e.to_string()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
