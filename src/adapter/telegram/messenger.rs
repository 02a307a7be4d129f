//! [`Messenger`] implementation backed by a teloxide [`Bot`].

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{
    InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup, KeyboardRemove,
    MessageId, ParseMode, ReplyMarkup,
};
use teloxide::{ApiError, RequestError};
use tracing::debug;

use crate::domain::MessageRef;
use crate::error::DeliveryError;
use crate::port::{InlineButton, Markup, Messenger, OutgoingMessage, TextFormat};

/// Sends bot replies through the Telegram Bot API.
#[derive(Clone)]
pub struct TeloxideMessenger {
    bot: Bot,
}

impl TeloxideMessenger {
    #[must_use]
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[allow(deprecated)]
fn parse_mode(format: TextFormat) -> Option<ParseMode> {
    match format {
        TextFormat::Plain => None,
        TextFormat::Markdown => Some(ParseMode::Markdown),
    }
}

fn inline_keyboard(rows: &[Vec<InlineButton>]) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(rows.iter().map(|row| {
        row.iter()
            .map(|button| InlineKeyboardButton::callback(button.label.clone(), button.data.clone()))
            .collect::<Vec<_>>()
    }))
}

fn reply_markup(markup: &Markup) -> Option<ReplyMarkup> {
    match markup {
        Markup::None => None,
        Markup::Inline(rows) => Some(ReplyMarkup::InlineKeyboard(inline_keyboard(rows))),
        Markup::Keyboard(rows) => Some(ReplyMarkup::Keyboard(
            KeyboardMarkup::new(
                rows.iter()
                    .map(|row| row.iter().map(KeyboardButton::new).collect::<Vec<_>>()),
            )
            .resize_keyboard(),
        )),
        Markup::RemoveKeyboard => Some(ReplyMarkup::KeyboardRemove(KeyboardRemove::new())),
    }
}

fn delivery_error(chat_id: i64, err: RequestError) -> DeliveryError {
    match err {
        RequestError::Api(ApiError::ChatNotFound) => DeliveryError::ChatNotFound { chat_id },
        RequestError::Api(
            ApiError::BotBlocked
            | ApiError::BotKicked
            | ApiError::BotKickedFromSupergroup
            | ApiError::UserDeactivated
            | ApiError::CantInitiateConversation,
        ) => DeliveryError::Forbidden { chat_id },
        other => DeliveryError::Request(other.to_string()),
    }
}

#[async_trait]
impl Messenger for TeloxideMessenger {
    async fn send(&self, chat_id: i64, message: OutgoingMessage) -> Result<(), DeliveryError> {
        let mut request = self.bot.send_message(ChatId(chat_id), message.text);
        if let Some(mode) = parse_mode(message.format) {
            request = request.parse_mode(mode);
        }
        if let Some(markup) = reply_markup(&message.markup) {
            request = request.reply_markup(markup);
        }
        request
            .await
            .map(|_| ())
            .map_err(|e| delivery_error(chat_id, e))
    }

    async fn edit(
        &self,
        target: MessageRef,
        message: OutgoingMessage,
    ) -> Result<(), DeliveryError> {
        let mut request = self.bot.edit_message_text(
            ChatId(target.chat.id),
            MessageId(target.message_id),
            message.text,
        );
        if let Some(mode) = parse_mode(message.format) {
            request = request.parse_mode(mode);
        }
        if let Markup::Inline(rows) = &message.markup {
            request = request.reply_markup(inline_keyboard(rows));
        }
        match request.await {
            Ok(_) => Ok(()),
            Err(RequestError::Api(ApiError::MessageNotModified)) => {
                debug!(chat_id = target.chat.id, "Edit left message unchanged");
                Ok(())
            }
            Err(e) => Err(delivery_error(target.chat.id, e)),
        }
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<(), DeliveryError> {
        self.bot
            .answer_callback_query(callback_id)
            .await
            .map(|_| ())
            .map_err(|e| DeliveryError::Request(e.to_string()))
    }

    async fn chat_name(&self, chat_id: i64) -> Result<Option<String>, DeliveryError> {
        let chat = self
            .bot
            .get_chat(ChatId(chat_id))
            .await
            .map_err(|e| delivery_error(chat_id, e))?;

        if let Some(title) = chat.title() {
            return Ok(Some(title.to_string()));
        }

        let name = [chat.first_name(), chat.last_name()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        if !name.is_empty() {
            return Ok(Some(name));
        }
        Ok(chat.username().map(|username| format!("@{username}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_blocked_bot_to_forbidden() {
        let err = delivery_error(7, RequestError::Api(ApiError::BotBlocked));
        assert_eq!(err, DeliveryError::Forbidden { chat_id: 7 });
    }

    #[test]
    fn maps_missing_chat() {
        let err = delivery_error(-5, RequestError::Api(ApiError::ChatNotFound));
        assert_eq!(err, DeliveryError::ChatNotFound { chat_id: -5 });
    }

    #[test]
    fn plain_text_has_no_parse_mode() {
        assert!(parse_mode(TextFormat::Plain).is_none());
        assert!(parse_mode(TextFormat::Markdown).is_some());
    }

    #[test]
    fn inline_markup_keeps_rows() {
        let markup = Markup::Inline(vec![
            vec![InlineButton::new("A", "a"), InlineButton::new("B", "b")],
            vec![InlineButton::new("C", "c")],
        ]);
        let Some(ReplyMarkup::InlineKeyboard(keyboard)) = reply_markup(&markup) else {
            panic!("expected inline keyboard");
        };
        assert_eq!(keyboard.inline_keyboard.len(), 2);
        assert_eq!(keyboard.inline_keyboard[0].len(), 2);
    }

    #[test]
    fn no_markup_for_plain_messages() {
        assert!(reply_markup(&Markup::None).is_none());
    }
}
