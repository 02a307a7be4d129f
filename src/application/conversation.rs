//! Multi-step conversations.
//!
//! A conversation belongs to one user in one chat. Only one conversation is
//! active per (chat, user); starting another replaces it. State lives in
//! memory and is lost on restart.

use dashmap::DashMap;

use crate::domain::CommissionKind;

/// Where a user is in a multi-step flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversation {
    /// `/comm` was sent; waiting for a kind button and then an amount.
    Commission { kind: Option<CommissionKind> },
    /// `/feedback` was sent; the next text goes to the admin.
    Feedback,
    /// Admin is picking a broadcast target.
    BroadcastSelect,
    /// Admin picked a target and is typing the message.
    BroadcastCompose { target: i64, name: String },
    /// Admin typed the message and must confirm it.
    BroadcastConfirm {
        target: i64,
        name: String,
        message: String,
    },
}

impl Conversation {
    /// True when the next plain text message belongs to this conversation.
    #[must_use]
    pub const fn awaits_text(&self) -> bool {
        matches!(
            self,
            Self::Commission { .. } | Self::Feedback | Self::BroadcastCompose { .. }
        )
    }

    #[must_use]
    pub const fn is_broadcast(&self) -> bool {
        matches!(
            self,
            Self::BroadcastSelect | Self::BroadcastCompose { .. } | Self::BroadcastConfirm { .. }
        )
    }
}

/// Identifies whose conversation it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConversationKey {
    pub chat_id: i64,
    pub user_id: i64,
}

impl ConversationKey {
    #[must_use]
    pub const fn new(chat_id: i64, user_id: i64) -> Self {
        Self { chat_id, user_id }
    }
}

/// Active conversations.
#[derive(Debug, Default)]
pub struct Conversations {
    active: DashMap<ConversationKey, Conversation>,
}

impl Conversations {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: ConversationKey) -> Option<Conversation> {
        self.active.get(&key).map(|entry| entry.value().clone())
    }

    pub fn set(&self, key: ConversationKey, conversation: Conversation) {
        self.active.insert(key, conversation);
    }

    /// End a conversation, returning its last state.
    pub fn end(&self, key: ConversationKey) -> Option<Conversation> {
        self.active.remove(&key).map(|(_, conversation)| conversation)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
