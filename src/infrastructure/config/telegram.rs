//! Telegram bot configuration.

use serde::Deserialize;
use url::Url;

use crate::error::ConfigError;

const fn default_port() -> u16 {
    8080
}

/// How the bot receives updates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateMode {
    /// Long polling via `getUpdates`.
    #[default]
    Polling,
    /// Telegram pushes updates to an HTTP endpoint served by the bot.
    Webhook,
}

/// Telegram bot configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramAppConfig {
    /// Bot API token. Only read from `TELEGRAM_BOT_TOKEN`.
    #[serde(skip)]
    pub bot_token: Option<String>,
    /// User allowed to run admin commands; receives feedback and error reports.
    #[serde(default)]
    pub admin_id: i64,
    #[serde(default)]
    pub mode: UpdateMode,
    /// Public base URL Telegram posts updates to (webhook mode).
    #[serde(default)]
    pub webhook_url: Option<String>,
    /// Path under `webhook_url`. Defaults to the bot token.
    #[serde(default)]
    pub webhook_path: Option<String>,
    /// Local port for the webhook server (default: 8080).
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for TelegramAppConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            admin_id: 0,
            mode: UpdateMode::Polling,
            webhook_url: None,
            webhook_path: None,
            port: default_port(),
        }
    }
}

impl TelegramAppConfig {
    /// Full URL Telegram should deliver updates to.
    ///
    /// # Errors
    ///
    /// Returns an error when no base URL is configured or it does not parse.
    pub fn webhook_endpoint(&self) -> Result<Url, ConfigError> {
        let base = self
            .webhook_url
            .as_deref()
            .ok_or(ConfigError::MissingField {
                field: "webhook_url",
            })?;
        let base = if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{base}/")
        };

        let path = self
            .webhook_path
            .as_deref()
            .or(self.bot_token.as_deref())
            .unwrap_or_default()
            .trim_start_matches('/');

        Url::parse(&format!("{base}{path}")).map_err(|e| ConfigError::InvalidValue {
            field: "webhook_url",
            reason: e.to_string(),
        })
    }
}
