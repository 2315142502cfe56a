//! Reachability sampling.
//!
//! # Data Flow
//! ```text
//! Monitor loop / retry wrapper
//!     → SampleSource::sample() (one boolean reading, may block)
//!         → icmp.rs     (system ping, one echo request)
//!         → tcp.rs      (TCP connect with timeout)
//!         → scripted.rs (fixed sequence, simulation and tests)
//! ```
//!
//! # Design Decisions
//! - An unreachable host is a `false` reading, never an error
//! - A source is a single long-lived stream: callers borrow it mutably,
//!   so every draw anywhere advances the same position
//! - No cancellation of an in-flight probe; each one is bounded by its own timeout

use std::future::Future;

use crate::config::{ProbeMethod, TargetConfig};

pub mod icmp;
pub mod scripted;
pub mod tcp;

pub use icmp::IcmpProbe;
pub use scripted::ScriptedSource;
pub use tcp::TcpProbe;

/// An unbounded source of boolean reachability readings.
pub trait SampleSource: Send {
    /// Draw the next reading.
    fn sample(&mut self) -> impl Future<Output = bool> + Send;
}

/// The probe selected at startup.
#[derive(Debug)]
pub enum HostProbe {
    Icmp(IcmpProbe),
    Tcp(TcpProbe),
    Scripted(ScriptedSource),
}

impl HostProbe {
    /// Build the probe described by the target configuration.
    ///
    /// Config validation guarantees a port for TCP probes.
    pub fn from_config(target: &TargetConfig) -> Self {
        let timeout = std::time::Duration::from_secs(target.probe.timeout_secs);
        match (target.probe.method, target.probe.port) {
            (ProbeMethod::Tcp, Some(port)) => {
                HostProbe::Tcp(TcpProbe::new(target.host.clone(), port, timeout))
            }
            (ProbeMethod::Tcp, None) => {
                tracing::warn!(host = %target.host, "TCP probe without port, falling back to ICMP");
                HostProbe::Icmp(IcmpProbe::new(target.host.clone(), timeout))
            }
            (ProbeMethod::Icmp, _) => HostProbe::Icmp(IcmpProbe::new(target.host.clone(), timeout)),
        }
    }

    /// Short name of the probe mechanism for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            HostProbe::Icmp(_) => "icmp",
            HostProbe::Tcp(_) => "tcp",
            HostProbe::Scripted(_) => "scripted",
        }
    }
}

impl SampleSource for HostProbe {
    async fn sample(&mut self) -> bool {
        match self {
            HostProbe::Icmp(probe) => probe.sample().await,
            HostProbe::Tcp(probe) => probe.sample().await,
            HostProbe::Scripted(source) => source.sample().await,
        }
    }
}
