//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with environment variable overrides
//! for secrets and deployment values such as `TELEGRAM_BOT_TOKEN`.
//!
//! # Example
//!
//! ```no_run
//! use depobot::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::logging::LoggingConfig;
use super::schedule::ScheduleConfig;
use super::telegram::{TelegramAppConfig, UpdateMode};
use crate::application::bot::BotSettings;
use crate::error::{ConfigError, Result};

/// Environment variable holding the bot token.
pub const TOKEN_VAR: &str = "TELEGRAM_BOT_TOKEN";
/// Environment variable overriding `telegram.admin_id`.
pub const ADMIN_ID_VAR: &str = "ADMIN_ID";
/// Environment variable holding the public URL on hosted deployments.
/// Setting it switches the bot to webhook mode.
pub const EXTERNAL_URL_VAR: &str = "RENDER_EXTERNAL_URL";
/// Environment variable overriding `telegram.port`.
pub const PORT_VAR: &str = "PORT";

/// Main application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub telegram: TelegramAppConfig,

    /// Report-day time zone and cutoff.
    #[serde(default)]
    pub schedule: ScheduleConfig,

    /// Path to the JSON bot data file.
    ///
    /// Defaults to "bot_data.json" in the current directory.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("bot_data.json")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            telegram: TelegramAppConfig::default(),
            schedule: ScheduleConfig::default(),
            data_file: default_data_file(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML content, applying overrides from the
    /// process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed, an environment
    /// override does not parse, or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_toml_with_env(content, |key| std::env::var(key).ok())
    }

    /// Parse configuration from TOML content, reading overrides through `env`.
    ///
    /// # Errors
    ///
    /// See [`Config::parse_toml`].
    pub fn parse_toml_with_env<F>(content: &str, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env(env)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// A missing file is not an error: defaults plus environment overrides
    /// are used instead, which is how hosted deployments run.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, the content is
    /// malformed, or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Self::parse_toml("");
        }
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    fn apply_env<F>(&mut self, env: F) -> std::result::Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Token is never read from the config file.
        self.telegram.bot_token = env(TOKEN_VAR).filter(|token| !token.trim().is_empty());

        if let Some(admin_id) = env(ADMIN_ID_VAR) {
            self.telegram.admin_id =
                admin_id
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue {
                        field: "ADMIN_ID",
                        reason: format!("not an integer: {admin_id:?}"),
                    })?;
        }

        if let Some(url) = env(EXTERNAL_URL_VAR).filter(|url| !url.trim().is_empty()) {
            self.telegram.webhook_url = Some(url.trim().to_string());
            self.telegram.mode = UpdateMode::Webhook;
        }

        if let Some(port) = env(PORT_VAR) {
            self.telegram.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: "PORT",
                reason: format!("not a port number: {port:?}"),
            })?;
        }

        Ok(())
    }

    /// Validate configuration values.
    fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.telegram.bot_token.is_none() {
            return Err(ConfigError::MissingField { field: TOKEN_VAR });
        }
        if self.telegram.admin_id == 0 {
            return Err(ConfigError::InvalidValue {
                field: "admin_id",
                reason: "must be a Telegram user id".to_string(),
            });
        }
        self.schedule.clock()?;
        if self.telegram.mode == UpdateMode::Webhook {
            self.telegram.webhook_endpoint()?;
        }
        Ok(())
    }

    /// Bot token. Present on every validated config.
    #[must_use]
    pub fn bot_token(&self) -> &str {
        self.telegram.bot_token.as_deref().unwrap_or_default()
    }

    /// Settings handed to the bot service.
    ///
    /// # Errors
    ///
    /// Returns an error when the schedule is malformed.
    pub fn bot_settings(&self) -> Result<BotSettings> {
        Ok(BotSettings {
            admin_id: self.telegram.admin_id,
            clock: self.schedule.clock()?,
        })
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
