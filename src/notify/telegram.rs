//! Telegram Bot API notifier.
//!
//! Posts to `{api_base_url}/bot{token}/sendMessage` with `chat_id` and
//! `text` as query parameters. The bot token is part of the URL, so it is
//! stripped from transport errors and never logged.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::config::TelegramConfig;
use crate::notify::{Notifier, NotifyError};

/// Envelope every Bot API response is wrapped in.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Clone)]
pub struct TelegramNotifier {
    client: reqwest::Client,
    endpoint: Url,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(config: &TelegramConfig) -> Result<Self, NotifyError> {
        let endpoint = format!(
            "{}/bot{}/sendMessage",
            config.api_base_url.trim_end_matches('/'),
            config.api_token
        );
        let endpoint = Url::parse(&endpoint)
            .map_err(|e| NotifyError::Config(format!("invalid API base URL '{}': {}", config.api_base_url, e)))?;

        let mut builder = reqwest::Client::builder().timeout(Duration::from_secs(config.timeout_secs));
        if !config.use_proxy {
            builder = builder.no_proxy();
        }
        let client = builder
            .build()
            .map_err(|e| NotifyError::Config(e.without_url().to_string()))?;

        Ok(Self {
            client,
            endpoint,
            chat_id: config.channel_id.clone(),
        })
    }
}

impl fmt::Debug for TelegramNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramNotifier")
            .field("host", &self.endpoint.host_str())
            .field("chat_id", &self.chat_id)
            .finish_non_exhaustive()
    }
}

impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .query(&[("chat_id", self.chat_id.as_str()), ("text", text)])
            .send()
            .await
            .map_err(|e| NotifyError::Transport(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let headers = format!("{:?}", response.headers());
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                status = status.as_u16(),
                headers = %headers,
                body = %body,
                "Telegram API returned non-success status"
            );
            return Err(NotifyError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: ApiResponse = response
            .json()
            .await
            .map_err(|e| NotifyError::Transport(e.without_url()))?;
        if !envelope.ok {
            return Err(NotifyError::Rejected(
                envelope.description.unwrap_or_else(|| "no description".to_string()),
            ));
        }

        tracing::debug!(chat_id = %self.chat_id, "Telegram message delivered");
        Ok(())
    }
}
