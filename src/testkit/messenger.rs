//! Recording messenger for asserting on bot replies.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::MessageRef;
use crate::error::DeliveryError;
use crate::port::{Messenger, OutgoingMessage};

/// A message the bot sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sent {
    pub chat_id: i64,
    pub message: OutgoingMessage,
}

/// An edit the bot applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edited {
    pub target: MessageRef,
    pub message: OutgoingMessage,
}

#[derive(Debug, Default)]
struct Recorded {
    sent: Vec<Sent>,
    edited: Vec<Edited>,
    answered: Vec<String>,
}

/// Thread-safe messenger that records outbound traffic.
///
/// Chat names come from [`RecordingMessenger::with_chat_name`]; chats
/// registered with [`RecordingMessenger::failing_chat`] reject every send
/// and name lookup.
#[derive(Debug, Default)]
pub struct RecordingMessenger {
    recorded: Mutex<Recorded>,
    names: Mutex<HashMap<i64, String>>,
    failing: Mutex<HashSet<i64>>,
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `chat_name` return `name` for `chat_id`.
    pub fn with_chat_name(self, chat_id: i64, name: &str) -> Self {
        self.names.lock().insert(chat_id, name.to_string());
        self
    }

    /// Make every send to `chat_id` fail as if the bot was blocked, and its
    /// name lookup fail as if the chat was gone.
    pub fn failing_chat(self, chat_id: i64) -> Self {
        self.failing.lock().insert(chat_id);
        self
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.recorded.lock().sent.clone()
    }

    /// Texts sent to one chat, in order.
    pub fn texts_to(&self, chat_id: i64) -> Vec<String> {
        self.recorded
            .lock()
            .sent
            .iter()
            .filter(|sent| sent.chat_id == chat_id)
            .map(|sent| sent.message.text.clone())
            .collect()
    }

    /// Last message sent to one chat.
    pub fn last_to(&self, chat_id: i64) -> Option<OutgoingMessage> {
        self.recorded
            .lock()
            .sent
            .iter()
            .rev()
            .find(|sent| sent.chat_id == chat_id)
            .map(|sent| sent.message.clone())
    }

    pub fn edited(&self) -> Vec<Edited> {
        self.recorded.lock().edited.clone()
    }

    /// Last edit applied to any message.
    pub fn last_edit(&self) -> Option<OutgoingMessage> {
        self.recorded
            .lock()
            .edited
            .last()
            .map(|edit| edit.message.clone())
    }

    pub fn answered(&self) -> Vec<String> {
        self.recorded.lock().answered.clone()
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        *self.recorded.lock() = Recorded::default();
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send(&self, chat_id: i64, message: OutgoingMessage) -> Result<(), DeliveryError> {
        if self.failing.lock().contains(&chat_id) {
            return Err(DeliveryError::Forbidden { chat_id });
        }
        self.recorded.lock().sent.push(Sent { chat_id, message });
        Ok(())
    }

    async fn edit(
        &self,
        target: MessageRef,
        message: OutgoingMessage,
    ) -> Result<(), DeliveryError> {
        self.recorded.lock().edited.push(Edited { target, message });
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<(), DeliveryError> {
        self.recorded
            .lock()
            .answered
            .push(callback_id.to_string());
        Ok(())
    }

    async fn chat_name(&self, chat_id: i64) -> Result<Option<String>, DeliveryError> {
        if self.failing.lock().contains(&chat_id) {
            return Err(DeliveryError::ChatNotFound { chat_id });
        }
        Ok(self.names.lock().get(&chat_id).cloned())
    }
}
