//! TCP connect probe.
//!
//! For hosts that drop ICMP: a completed handshake on `port` counts as
//! reachable. Refused, unresolvable and timed-out connects are all `false`.

use std::time::Duration;

use tokio::net::TcpStream;
use tokio::time;

use crate::probe::SampleSource;

#[derive(Debug, Clone)]
pub struct TcpProbe {
    host: String,
    port: u16,
    timeout: Duration,
}

impl TcpProbe {
    pub fn new(host: impl Into<String>, port: u16, timeout: Duration) -> Self {
        Self {
            host: host.into(),
            port,
            timeout,
        }
    }

    async fn connect(&self) -> bool {
        let target = (self.host.as_str(), self.port);
        match time::timeout(self.timeout, TcpStream::connect(target)).await {
            Ok(Ok(_stream)) => true,
            Ok(Err(e)) => {
                tracing::debug!(host = %self.host, port = self.port, error = %e, "TCP probe failed: connection error");
                false
            }
            Err(_) => {
                tracing::debug!(host = %self.host, port = self.port, "TCP probe failed: timeout");
                false
            }
        }
    }
}

impl SampleSource for TcpProbe {
    async fn sample(&mut self) -> bool {
        self.connect().await
    }
}
