use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Persistence errors for the bot data snapshot.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to access data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode or decode bot data: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Outbound message delivery errors reported by a messenger.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("chat {chat_id} not found")]
    ChatNotFound { chat_id: i64 },

    #[error("bot is blocked or was removed from chat {chat_id}")]
    Forbidden { chat_id: i64 },

    #[error("telegram request failed: {0}")]
    Request(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("webhook setup failed: {0}")]
    Webhook(String),
}

pub type Result<T> = std::result::Result<T, Error>;
