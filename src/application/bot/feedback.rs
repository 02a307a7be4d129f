use tracing::info;

use crate::domain::IncomingMessage;
use crate::error::Result;
use crate::port::OutgoingMessage;

use super::super::conversation::{Conversation, ConversationKey};
use super::super::text;
use super::DepositBot;

impl DepositBot {
    pub(super) async fn start_feedback(&self, message: &IncomingMessage) -> Result<()> {
        self.conversations
            .set(self.key_for(message), Conversation::Feedback);
        self.reply(message, OutgoingMessage::plain(text::FEEDBACK_PROMPT))
            .await
    }

    /// Forward the feedback to the admin as plain text so user input can't
    /// break message formatting.
    pub(super) async fn forward_feedback(
        &self,
        message: &IncomingMessage,
        key: ConversationKey,
    ) -> Result<()> {
        self.conversations.end(key);

        let (full_name, username) = message.sender.as_ref().map_or(("Unknown", None), |s| {
            (s.full_name.as_str(), s.username.as_deref())
        });
        let forwarded =
            text::feedback_for_admin(full_name, username, message.sender_id(), &message.text);

        self.messenger
            .send(self.settings.admin_id, OutgoingMessage::plain(forwarded))
            .await?;
        info!(user_id = message.sender_id(), "Forwarded feedback to admin");

        self.reply(message, OutgoingMessage::plain(text::FEEDBACK_SENT))
            .await
    }
}
