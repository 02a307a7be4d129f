//! `/comm` commission calculator conversation.

use crate::domain::{parse_amount, CommissionKind, IncomingCallback, IncomingMessage};
use crate::error::Result;
use crate::port::OutgoingMessage;

use super::super::conversation::{Conversation, ConversationKey};
use super::super::text;
use super::DepositBot;

impl DepositBot {
    pub(super) async fn start_commission(&self, message: &IncomingMessage) -> Result<()> {
        self.conversations
            .set(self.key_for(message), Conversation::Commission { kind: None });
        self.reply(
            message,
            OutgoingMessage::markdown(text::COMMISSION_PROMPT)
                .with_markup(text::commission_keyboard()),
        )
        .await
    }

    pub(super) async fn select_commission_kind(
        &self,
        callback: &IncomingCallback,
        key: ConversationKey,
        kind: CommissionKind,
    ) -> Result<()> {
        self.messenger.answer_callback(&callback.id).await?;
        self.conversations
            .set(key, Conversation::Commission { kind: Some(kind) });
        self.edit_origin(
            callback,
            OutgoingMessage::markdown(text::commission_amount_prompt(kind)),
        )
        .await
    }

    /// The amount arrived; the conversation ends whatever the outcome.
    pub(super) async fn calculate_commission(
        &self,
        message: &IncomingMessage,
        key: ConversationKey,
        kind: Option<CommissionKind>,
    ) -> Result<()> {
        self.conversations.end(key);

        let amount = match parse_amount(&message.text) {
            Ok(amount) => amount,
            Err(_) => {
                return self
                    .reply(
                        message,
                        OutgoingMessage::plain(text::COMMISSION_INVALID_AMOUNT),
                    )
                    .await;
            }
        };

        let Some(kind) = kind else {
            return self
                .reply(message, OutgoingMessage::plain(text::COMMISSION_KIND_MISSING))
                .await;
        };

        self.reply(
            message,
            OutgoingMessage::markdown(text::commission_result(
                kind,
                message.text.trim(),
                amount,
            )),
        )
        .await
    }

    pub(super) async fn cancel_commission(
        &self,
        callback: &IncomingCallback,
        key: ConversationKey,
    ) -> Result<()> {
        self.messenger.answer_callback(&callback.id).await?;
        self.conversations.end(key);
        self.edit_origin(callback, OutgoingMessage::plain(text::COMMISSION_CANCELLED))
            .await
    }
}
