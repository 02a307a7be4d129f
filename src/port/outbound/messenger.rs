//! Messenger port for talking back to chats.
//!
//! The bot logic describes what to send with [`OutgoingMessage`] and hands
//! it to a [`Messenger`]. The Telegram adapter implements it on top of
//! teloxide; tests use a recording implementation.

use async_trait::async_trait;

use crate::domain::MessageRef;
use crate::error::DeliveryError;

/// How Telegram should interpret message text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextFormat {
    #[default]
    Plain,
    /// Legacy Telegram Markdown (`*bold*`, `` `code` ``).
    Markdown,
}

/// A button under a message that reports back with callback data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineButton {
    pub label: String,
    pub data: String,
}

impl InlineButton {
    pub fn new(label: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            data: data.into(),
        }
    }
}

/// Keyboard attached to a message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Markup {
    #[default]
    None,
    /// Buttons under the message, one inner vec per row.
    Inline(Vec<Vec<InlineButton>>),
    /// Persistent reply keyboard replacing the user's keyboard.
    Keyboard(Vec<Vec<String>>),
    /// Remove a previously shown reply keyboard.
    RemoveKeyboard,
}

/// A message to send or an edit to apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub text: String,
    pub format: TextFormat,
    pub markup: Markup,
}

impl OutgoingMessage {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: TextFormat::Markdown,
            markup: Markup::None,
        }
    }

    #[must_use]
    pub fn with_markup(mut self, markup: Markup) -> Self {
        self.markup = markup;
        self
    }
}

/// Outbound messaging.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Send a new message to a chat.
    async fn send(&self, chat_id: i64, message: OutgoingMessage) -> Result<(), DeliveryError>;

    /// Replace the text (and inline keyboard) of a message the bot sent.
    async fn edit(&self, target: MessageRef, message: OutgoingMessage)
        -> Result<(), DeliveryError>;

    /// Acknowledge an inline button press.
    async fn answer_callback(&self, callback_id: &str) -> Result<(), DeliveryError>;

    /// Title of a group or full name of a user, if Telegram knows one.
    async fn chat_name(&self, chat_id: i64) -> Result<Option<String>, DeliveryError>;
}
