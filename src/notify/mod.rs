//! Notification delivery.
//!
//! # Data Flow
//! ```text
//! Monitor loop / shutdown path
//!     → message.rs (human-readable text)
//!     → Notifier::send
//!         → telegram.rs (Bot API sendMessage)
//!         → LogNotifier (dry run, log only)
//! ```
//!
//! # Design Decisions
//! - Delivery failures are returned to the caller, which logs them and moves on
//! - A missed notification is never retried

use std::future::Future;

use thiserror::Error;

use crate::config::HostWatchConfig;

pub mod message;
pub mod telegram;

pub use telegram::TelegramNotifier;

/// Errors that can occur while delivering a notification.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The API answered 2xx but refused the message.
    #[error("message rejected: {0}")]
    Rejected(String),

    /// The notifier could not be built from its configuration.
    #[error("invalid notifier configuration: {0}")]
    Config(String),
}

/// A remote channel that accepts text messages.
pub trait Notifier: Send + Sync {
    fn send(&self, text: &str) -> impl Future<Output = Result<(), NotifyError>> + Send;
}

/// Notifier that only writes messages to the log.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        tracing::info!(message = %text, "Notification (dry run)");
        Ok(())
    }
}

/// The notification channel selected at startup.
#[derive(Debug, Clone)]
pub enum NotifyChannel {
    Telegram(TelegramNotifier),
    Log(LogNotifier),
}

impl NotifyChannel {
    /// Telegram when configured and not a dry run, otherwise the log.
    pub fn from_config(config: &HostWatchConfig, dry_run: bool) -> Result<Self, NotifyError> {
        match (&config.telegram, dry_run) {
            (Some(telegram), false) => Ok(NotifyChannel::Telegram(TelegramNotifier::new(telegram)?)),
            _ => Ok(NotifyChannel::Log(LogNotifier)),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            NotifyChannel::Telegram(_) => "telegram",
            NotifyChannel::Log(_) => "log",
        }
    }
}

impl Notifier for NotifyChannel {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        match self {
            NotifyChannel::Telegram(notifier) => notifier.send(text).await,
            NotifyChannel::Log(notifier) => notifier.send(text).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TelegramConfig;

    fn with_telegram() -> HostWatchConfig {
        HostWatchConfig {
            telegram: Some(TelegramConfig {
                api_token: "1:token".to_string(),
                channel_id: "7".to_string(),
                api_base_url: "https://api.telegram.org".to_string(),
                timeout_secs: 5,
                use_proxy: true,
            }),
            ..HostWatchConfig::default()
        }
    }

    #[test]
    fn test_channel_selection() {
        assert_eq!(NotifyChannel::from_config(&with_telegram(), false).unwrap().kind(), "telegram");
        assert_eq!(NotifyChannel::from_config(&with_telegram(), true).unwrap().kind(), "log");
        assert_eq!(NotifyChannel::from_config(&HostWatchConfig::default(), false).unwrap().kind(), "log");
    }

    #[tokio::test]
    async fn test_log_notifier_always_succeeds() {
        assert!(LogNotifier.send("hello").await.is_ok());
    }
}
