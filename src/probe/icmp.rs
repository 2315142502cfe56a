//! ICMP echo probe.
//!
//! Sends a single echo request through the system `ping` utility, which
//! already holds the privileges raw ICMP sockets need. Exit status zero
//! means a reply arrived.

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tokio::time;

use crate::probe::SampleSource;

/// Grace period on top of the ping timeout before the child is killed.
const SPAWN_GRACE: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct IcmpProbe {
    host: String,
    timeout: Duration,
}

impl IcmpProbe {
    pub fn new(host: impl Into<String>, timeout: Duration) -> Self {
        Self {
            host: host.into(),
            timeout,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new("ping");
        cmd.args(ping_args(&self.host, self.timeout))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);
        cmd
    }

    async fn echo(&self) -> bool {
        let status = match time::timeout(self.timeout + SPAWN_GRACE, self.command().status()).await {
            Ok(Ok(status)) => status,
            Ok(Err(e)) => {
                tracing::warn!(host = %self.host, error = %e, "Failed to run ping");
                return false;
            }
            Err(_) => {
                tracing::debug!(host = %self.host, "Ping did not exit in time");
                return false;
            }
        };

        if !status.success() {
            tracing::debug!(host = %self.host, code = ?status.code(), "No echo reply");
        }
        status.success()
    }
}

impl SampleSource for IcmpProbe {
    async fn sample(&mut self) -> bool {
        self.echo().await
    }
}

#[cfg(target_os = "linux")]
fn ping_args(host: &str, timeout: Duration) -> Vec<String> {
    let secs = timeout.as_secs().max(1);
    vec!["-c".into(), "1".into(), "-W".into(), secs.to_string(), host.into()]
}

#[cfg(target_os = "macos")]
fn ping_args(host: &str, timeout: Duration) -> Vec<String> {
    let secs = timeout.as_secs().max(1);
    vec!["-c".into(), "1".into(), "-t".into(), secs.to_string(), host.into()]
}

#[cfg(windows)]
fn ping_args(host: &str, timeout: Duration) -> Vec<String> {
    let millis = timeout.as_millis().max(1);
    vec!["-n".into(), "1".into(), "-w".into(), millis.to_string(), host.into()]
}

#[cfg(not(any(target_os = "linux", target_os = "macos", windows)))]
fn ping_args(host: &str, _timeout: Duration) -> Vec<String> {
    vec!["-c".into(), "1".into(), host.into()]
}
