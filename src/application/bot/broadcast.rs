//! Admin broadcasts: one message to every tracked chat, or a guided
//! select-compose-confirm flow for a single chat.

use tracing::{info, warn};

use crate::domain::{IncomingCallback, IncomingMessage};
use crate::error::Result;
use crate::port::{InlineButton, Markup, OutgoingMessage};

use super::super::callback::CallbackAction;
use super::super::conversation::{Conversation, ConversationKey};
use super::super::text;
use super::DepositBot;

impl DepositBot {
    /// `/broadcast <message>`: send to every tracked user and group.
    pub(super) async fn broadcast_all(&self, message: &IncomingMessage, body: &str) -> Result<()> {
        if !self.is_admin(message.sender_id()) {
            return self
                .reply(message, OutgoingMessage::plain(text::NOT_AUTHORIZED))
                .await;
        }

        let targets: Vec<i64> = {
            let data = self.data.read();
            data.users.iter().chain(data.groups.iter()).copied().collect()
        };

        let mut successful = 0;
        for chat_id in targets {
            match self
                .messenger
                .send(chat_id, OutgoingMessage::plain(text::broadcast_message(body)))
                .await
            {
                Ok(()) => successful += 1,
                Err(e) => warn!(chat_id, error = %e, "Broadcast delivery failed"),
            }
        }

        info!(successful, "Broadcast finished");
        self.reply(
            message,
            OutgoingMessage::plain(text::broadcast_all_sent(successful)),
        )
        .await
    }

    /// `/broadcast`: list tracked chats to pick a single recipient.
    pub(super) async fn start_broadcast(&self, message: &IncomingMessage) -> Result<()> {
        if !self.is_admin(message.sender_id()) {
            return self
                .reply(message, OutgoingMessage::plain(text::ADMIN_ONLY))
                .await;
        }

        let (users, groups): (Vec<i64>, Vec<i64>) = {
            let data = self.data.read();
            (
                data.users.iter().copied().collect(),
                data.groups.iter().copied().collect(),
            )
        };

        if users.is_empty() && groups.is_empty() {
            return self
                .reply(message, OutgoingMessage::plain(text::BROADCAST_NO_CHATS))
                .await;
        }

        let mut rows = Vec::with_capacity(users.len() + groups.len() + 1);
        for user_id in users {
            let label = match self.messenger.chat_name(user_id).await {
                Ok(name) => {
                    let name = name.unwrap_or_else(|| format!("User {user_id}"));
                    text::broadcast_user_label(Some(name.as_str()), user_id)
                }
                Err(_) => text::broadcast_user_label(None, user_id),
            };
            rows.push(vec![InlineButton::new(
                label,
                CallbackAction::BroadcastTarget(user_id).encode(),
            )]);
        }
        for group_id in groups {
            let label = match self.messenger.chat_name(group_id).await {
                Ok(name) => {
                    let name = name.unwrap_or_else(|| format!("Group {group_id}"));
                    text::broadcast_group_label(Some(name.as_str()), group_id)
                }
                Err(_) => text::broadcast_group_label(None, group_id),
            };
            rows.push(vec![InlineButton::new(
                label,
                CallbackAction::BroadcastTarget(group_id).encode(),
            )]);
        }
        rows.push(vec![InlineButton::new(
            "❌ Cancel Broadcast",
            CallbackAction::BroadcastCancel.encode(),
        )]);

        self.conversations
            .set(self.key_for(message), Conversation::BroadcastSelect);
        self.reply(
            message,
            OutgoingMessage::markdown(text::BROADCAST_PROMPT).with_markup(Markup::Inline(rows)),
        )
        .await
    }

    pub(super) async fn select_broadcast_target(
        &self,
        callback: &IncomingCallback,
        key: ConversationKey,
        target: i64,
    ) -> Result<()> {
        self.messenger.answer_callback(&callback.id).await?;

        let name = match self.messenger.chat_name(target).await {
            Ok(Some(name)) => name,
            _ => format!("Chat ID: {target}"),
        };
        self.conversations.set(
            key,
            Conversation::BroadcastCompose {
                target,
                name: name.clone(),
            },
        );
        self.edit_origin(
            callback,
            OutgoingMessage::plain(text::broadcast_target_selected(&name)),
        )
        .await
    }

    pub(super) async fn compose_broadcast(
        &self,
        message: &IncomingMessage,
        key: ConversationKey,
        target: i64,
        name: String,
    ) -> Result<()> {
        let confirmation = text::broadcast_confirmation(&name, &message.text);
        self.conversations.set(
            key,
            Conversation::BroadcastConfirm {
                target,
                name,
                message: message.text.clone(),
            },
        );
        self.reply(
            message,
            OutgoingMessage::plain(confirmation).with_markup(text::broadcast_confirm_keyboard()),
        )
        .await
    }

    /// Send the composed message. Delivery failures are shown to the admin
    /// rather than treated as handler errors.
    pub(super) async fn confirm_broadcast(
        &self,
        callback: &IncomingCallback,
        key: ConversationKey,
        target: i64,
        name: &str,
        body: &str,
    ) -> Result<()> {
        self.messenger.answer_callback(&callback.id).await?;
        self.conversations.end(key);

        let outcome = match self
            .messenger
            .send(target, OutgoingMessage::plain(text::admin_message(body)))
            .await
        {
            Ok(()) => {
                info!(target, "Admin message delivered");
                text::broadcast_sent(name)
            }
            Err(e) => {
                warn!(target, error = %e, "Admin message delivery failed");
                text::broadcast_failed(name, &e.to_string())
            }
        };
        self.edit_origin(callback, OutgoingMessage::plain(outcome))
            .await
    }

    pub(super) async fn cancel_broadcast(
        &self,
        callback: &IncomingCallback,
        key: ConversationKey,
    ) -> Result<()> {
        self.messenger.answer_callback(&callback.id).await?;
        self.conversations.end(key);
        self.edit_origin(callback, OutgoingMessage::plain(text::BROADCAST_CANCELLED))
            .await
    }
}
