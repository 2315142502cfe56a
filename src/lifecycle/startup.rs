//! Startup orchestration.
//!
//! # Responsibilities
//! - Turn the validated configuration into a probe, a notifier and monitor settings
//! - Log the effective setup once
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Nothing here performs network I/O

use crate::config::HostWatchConfig;
use crate::health::MonitorSettings;
use crate::notify::{NotifyChannel, NotifyError};
use crate::probe::{HostProbe, ScriptedSource};

/// Command-line switches that alter what startup builds.
#[derive(Debug, Clone, Copy, Default)]
pub struct StartupOptions {
    /// Replace the real probe with the scripted flapping-host simulation.
    pub simulate: bool,
    /// Log notifications instead of delivering them.
    pub dry_run: bool,
}

/// Everything the monitor task needs.
#[derive(Debug)]
pub struct Components {
    pub settings: MonitorSettings,
    pub probe: HostProbe,
    pub notifier: NotifyChannel,
}

pub fn build_probe(config: &HostWatchConfig, options: StartupOptions) -> HostProbe {
    if options.simulate {
        HostProbe::Scripted(ScriptedSource::simulation(config.target.ping_retries))
    } else {
        HostProbe::from_config(&config.target)
    }
}

pub fn build_notifier(config: &HostWatchConfig, options: StartupOptions) -> Result<NotifyChannel, NotifyError> {
    NotifyChannel::from_config(config, options.dry_run)
}

/// Build all monitor components from a validated configuration.
pub fn build_components(config: &HostWatchConfig, options: StartupOptions) -> Result<Components, NotifyError> {
    let settings = MonitorSettings::from_target(&config.target);
    let probe = build_probe(config, options);
    let notifier = build_notifier(config, options)?;

    tracing::info!(
        host = %config.target.host,
        device = %settings.device_name,
        probe = probe.kind(),
        notifier = notifier.kind(),
        tolerance = settings.tolerance,
        max_attempts = settings.retry.max_attempts,
        monitor_delay_secs = settings.monitor_delay.as_secs(),
        "Configuration loaded"
    );

    Ok(Components {
        settings,
        probe,
        notifier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulate_and_dry_run() {
        let mut config = HostWatchConfig::default();
        config.target.host = "10.0.0.1".to_string();

        let options = StartupOptions {
            simulate: true,
            dry_run: true,
        };
        let components = build_components(&config, options).unwrap();
        assert_eq!(components.probe.kind(), "scripted");
        assert_eq!(components.notifier.kind(), "log");
        assert_eq!(components.settings.retry.max_attempts, config.target.ping_retries + 1);
    }

    #[test]
    fn test_default_builds_real_probe() {
        let mut config = HostWatchConfig::default();
        config.target.host = "10.0.0.1".to_string();

        let components = build_components(&config, StartupOptions::default()).unwrap();
        assert_eq!(components.probe.kind(), "icmp");
    }
}
