//! Admin-only commands.

use tracing::info;

use crate::domain::{IncomingCallback, IncomingMessage};
use crate::error::Result;
use crate::port::OutgoingMessage;

use super::super::text;
use super::DepositBot;

impl DepositBot {
    pub(super) async fn show_settings(&self, message: &IncomingMessage) -> Result<()> {
        if !self.is_admin(message.sender_id()) {
            return self
                .reply(message, OutgoingMessage::plain(text::ADMIN_ONLY))
                .await;
        }
        self.reply(message, OutgoingMessage::markdown(text::admin_settings()))
            .await
    }

    pub(super) async fn show_stats(&self, message: &IncomingMessage) -> Result<()> {
        if !self.is_admin(message.sender_id()) {
            return self
                .reply(message, OutgoingMessage::plain(text::NOT_AUTHORIZED))
                .await;
        }
        let stats = self.data.read().stats();
        self.reply(message, OutgoingMessage::plain(text::stats(stats)))
            .await
    }

    /// `/listgroups`: one message per tracked group with a clear button.
    pub(super) async fn list_groups(&self, message: &IncomingMessage) -> Result<()> {
        if !self.is_admin(message.sender_id()) {
            return self
                .reply(message, OutgoingMessage::plain(text::ADMIN_ONLY))
                .await;
        }

        let groups: Vec<i64> = self.data.read().groups.iter().copied().collect();
        if groups.is_empty() {
            return self
                .reply(message, OutgoingMessage::plain(text::NO_TRACKED_GROUPS))
                .await;
        }

        self.reply(message, OutgoingMessage::markdown(text::TRACKED_GROUPS_HEADER))
            .await?;

        for group_id in groups {
            let name = match self.messenger.chat_name(group_id).await {
                Ok(Some(name)) => name,
                _ => text::UNKNOWN_GROUP.to_string(),
            };
            self.reply(
                message,
                OutgoingMessage::plain(text::tracked_group(&name, group_id))
                    .with_markup(text::tracked_group_keyboard(group_id)),
            )
            .await?;
        }
        Ok(())
    }

    /// "Clear All Data" button from `/listgroups`.
    pub(super) async fn clear_group(&self, callback: &IncomingCallback, group_id: i64) -> Result<()> {
        self.messenger.answer_callback(&callback.id).await?;

        if !self.is_admin(callback.sender.id) {
            return self
                .edit_origin(callback, OutgoingMessage::plain(text::ADMIN_ONLY))
                .await;
        }

        let has_data = self.data.read().group_data.contains_key(&group_id);
        if !has_data || !self.mutate(|data| data.clear_chat(group_id))? {
            return self
                .edit_origin(callback, OutgoingMessage::plain(text::no_group_data(group_id)))
                .await;
        }

        info!(group_id, "Cleared all group data");
        let name = match self.messenger.chat_name(group_id).await {
            Ok(Some(name)) => name,
            _ => "Unknown Group".to_string(),
        };
        self.edit_origin(
            callback,
            OutgoingMessage::plain(text::group_data_cleared(&name, group_id)),
        )
        .await
    }

    pub(super) async fn cancel_group_action(&self, callback: &IncomingCallback) -> Result<()> {
        self.messenger.answer_callback(&callback.id).await?;

        let reply = if self.is_admin(callback.sender.id) {
            text::ACTION_CANCELLED
        } else {
            text::ADMIN_ONLY
        };
        self.edit_origin(callback, OutgoingMessage::plain(reply))
            .await
    }
}
