//! Framework-agnostic chat and update types.
//!
//! The bot logic never sees teloxide types. The Telegram adapter converts
//! incoming updates into these types before handing them over.

use serde::{Deserialize, Serialize};

/// Kind of chat an update came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatKind {
    Private,
    Group,
    Supergroup,
    Channel,
}

/// A chat an update came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chat {
    pub id: i64,
    pub kind: ChatKind,
}

/// The user who sent an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sender {
    pub id: i64,
    pub full_name: String,
    pub username: Option<String>,
}

/// An incoming text message (or media caption).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub chat: Chat,
    pub sender: Option<Sender>,
    pub text: String,
    /// Text came from a media caption. Captions never run commands or
    /// continue conversations.
    pub from_caption: bool,
}

impl IncomingMessage {
    /// Sender id, or 0 for anonymous group admins and channel posts.
    #[must_use]
    pub fn sender_id(&self) -> i64 {
        self.sender.as_ref().map_or(0, |s| s.id)
    }
}

/// An inline keyboard button press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingCallback {
    /// Callback query id, used to acknowledge the press.
    pub id: String,
    pub sender: Sender,
    /// Chat and message that carried the keyboard, if still accessible.
    pub origin: Option<MessageRef>,
    pub data: String,
}

/// Address of a message already sent by the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageRef {
    pub chat: Chat,
    pub message_id: i32,
}
