use crate::domain::IncomingMessage;
use crate::error::Result;
use crate::port::{Markup, OutgoingMessage};

use super::super::text;
use super::DepositBot;

impl DepositBot {
    /// `/start` and `/menu`: show the reply keyboard.
    pub(super) async fn show_menu(&self, message: &IncomingMessage) -> Result<()> {
        self.register_chat(message.chat)?;
        self.reply(
            message,
            OutgoingMessage::markdown(text::main_menu()).with_markup(text::main_menu_keyboard()),
        )
        .await
    }

    pub(super) async fn hide_menu(&self, message: &IncomingMessage) -> Result<()> {
        self.register_chat(message.chat)?;
        self.reply(
            message,
            OutgoingMessage::plain(text::MENU_HIDDEN).with_markup(Markup::RemoveKeyboard),
        )
        .await
    }

    pub(super) async fn show_help(&self, message: &IncomingMessage) -> Result<()> {
        self.register_chat(message.chat)?;
        self.reply(message, OutgoingMessage::markdown(text::help()))
            .await
    }

    /// `/form`: the blank deposit report template.
    pub(super) async fn show_form(&self, message: &IncomingMessage) -> Result<()> {
        self.register_chat(message.chat)?;
        self.reply(message, OutgoingMessage::markdown(text::report_form()))
            .await
    }
}
