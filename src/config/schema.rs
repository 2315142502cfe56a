//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the monitor.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the host monitor.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct HostWatchConfig {
    /// The monitored host and the stabilization settings.
    pub target: TargetConfig,

    /// Telegram delivery settings. Without them notifications are only logged.
    pub telegram: Option<TelegramConfig>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Target host configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Hostname or IP address to probe.
    pub host: String,

    /// Human-readable device name used in notifications.
    pub device_name: String,

    /// Pause between monitoring cycles in seconds.
    pub monitor_delay_secs: u64,

    /// Number of dissenting samples the window absorbs before flipping.
    pub flip_flop_tolerance: u32,

    /// Extra probes per cycle after a failed one.
    pub ping_retries: u32,

    /// Pause between retried probes in seconds.
    pub ping_retry_delay_secs: u64,

    /// Probe mechanism.
    pub probe: ProbeConfig,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            device_name: "device".to_string(),
            monitor_delay_secs: 60,
            flip_flop_tolerance: 1,
            ping_retries: 2,
            ping_retry_delay_secs: 5,
            probe: ProbeConfig::default(),
        }
    }
}

/// How reachability is sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProbeMethod {
    /// ICMP echo through the system `ping` utility.
    #[default]
    Icmp,
    /// TCP connect to `port`.
    Tcp,
}

/// Probe configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeConfig {
    pub method: ProbeMethod,

    /// Destination port, required for TCP probes.
    pub port: Option<u16>,

    /// Per-probe timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            method: ProbeMethod::Icmp,
            port: None,
            timeout_secs: 4,
        }
    }
}

/// Telegram Bot API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelegramConfig {
    /// Bot token issued by BotFather.
    pub api_token: String,

    /// Destination chat or channel id.
    pub channel_id: String,

    /// Bot API base URL.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_telegram_timeout")]
    pub timeout_secs: u64,

    /// Honour the system HTTP(S) proxy settings.
    #[serde(default = "default_use_proxy")]
    pub use_proxy: bool,
}

fn default_api_base_url() -> String {
    "https://api.telegram.org".to_string()
}

fn default_telegram_timeout() -> u64 {
    10
}

fn default_use_proxy() -> bool {
    true
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit JSON log lines instead of the human-readable format.
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let raw = r#"
            [target]
            host = "192.168.1.40"
            device_name = "EV charger"
            monitor_delay_secs = 30
            flip_flop_tolerance = 2
            ping_retries = 3
            ping_retry_delay_secs = 1

            [target.probe]
            method = "tcp"
            port = 502

            [telegram]
            api_token = "123:abc"
            channel_id = "-100200"

            [observability]
            log_level = "debug"
        "#;

        let config: HostWatchConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.target.host, "192.168.1.40");
        assert_eq!(config.target.flip_flop_tolerance, 2);
        assert_eq!(config.target.probe.method, ProbeMethod::Tcp);
        assert_eq!(config.target.probe.port, Some(502));
        assert_eq!(config.target.probe.timeout_secs, 4);

        let telegram = config.telegram.unwrap();
        assert_eq!(telegram.api_base_url, "https://api.telegram.org");
        assert_eq!(telegram.timeout_secs, 10);
        assert!(telegram.use_proxy);
        assert_eq!(config.observability.log_level, "debug");
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: HostWatchConfig = toml::from_str("[target]\nhost = \"nas.local\"\n").unwrap();
        assert_eq!(config.target.monitor_delay_secs, 60);
        assert_eq!(config.target.probe.method, ProbeMethod::Icmp);
        assert!(config.telegram.is_none());
        assert!(!config.observability.json);
    }
}
