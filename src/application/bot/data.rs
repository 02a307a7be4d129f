//! Report collection, daily digests and number checks.

use tracing::{debug, info};

use crate::domain::number;
use crate::domain::report::{render_digest, Digest, ReportEntry};
use crate::domain::IncomingMessage;
use crate::error::Result;
use crate::port::OutgoingMessage;

use super::super::text;
use super::DepositBot;

impl DepositBot {
    /// Free text outside a conversation: store a report or check a number.
    pub(super) async fn collect(&self, message: &IncomingMessage) -> Result<()> {
        if let Some(entry) = ReportEntry::extract(&message.text) {
            let line = entry.to_line();
            let day = self.settings.clock.current_key();
            self.mutate(|data| data.append_entry(message.chat.id, &day, line.clone()))?;
            info!(chat_id = message.chat.id, day = %day, khaifa = %entry.khaifa, "Collected deposit report");
            return self.reply(message, OutgoingMessage::plain(line)).await;
        }

        if let Some(number) = number::detect(&message.text) {
            return self.check_number(message, &number, true).await;
        }

        debug!(chat_id = message.chat.id, "Message is neither a report nor a number");
        Ok(())
    }

    /// `/chk <number>`.
    pub(super) async fn check_command(
        &self,
        message: &IncomingMessage,
        argument: Option<&str>,
    ) -> Result<()> {
        let number = argument.map(number::normalize).unwrap_or_default();
        if number.is_empty() {
            return self
                .reply(message, OutgoingMessage::plain(text::CHECK_USAGE))
                .await;
        }
        self.check_number(message, &number, false).await
    }

    async fn check_number(
        &self,
        message: &IncomingMessage,
        number: &str,
        with_search_hint: bool,
    ) -> Result<()> {
        let count = self.mutate(|data| data.check_number(number))?;
        debug!(chat_id = message.chat.id, number, count, "Checked number");
        self.reply(
            message,
            OutgoingMessage::plain(text::number_check(number, count, with_search_hint)),
        )
        .await
    }

    /// `/showdata`: today's entries grouped by khaifa.
    pub(super) async fn show_data(&self, message: &IncomingMessage) -> Result<()> {
        self.register_chat(message.chat)?;
        let day = self.settings.clock.current_key();
        let digest = render_digest(self.data.read().entries(message.chat.id, &day));

        let Some(digest) = digest else {
            return self
                .reply(message, OutgoingMessage::plain(text::no_data_today(&day)))
                .await;
        };

        match Digest::fit(digest) {
            Digest::Full(body) => self.reply(message, OutgoingMessage::plain(body)).await?,
            Digest::Truncated(head) => {
                self.reply(message, OutgoingMessage::plain(text::DIGEST_TOO_LONG))
                    .await?;
                self.reply(message, OutgoingMessage::plain(head)).await?;
            }
        }

        self.reply(message, OutgoingMessage::markdown(text::showdata_hint()))
            .await
    }

    /// `/cleardata`: drop today's entries for this chat.
    pub(super) async fn clear_data(&self, message: &IncomingMessage) -> Result<()> {
        self.register_chat(message.chat)?;
        let day = self.settings.clock.current_key();

        let has_day = self
            .data
            .read()
            .group_data
            .get(&message.chat.id)
            .is_some_and(|days| days.contains_key(&day));
        let removed = has_day && self.mutate(|data| data.clear_day(message.chat.id, &day))?;

        let reply = if removed {
            info!(chat_id = message.chat.id, day = %day, "Cleared daily data");
            text::data_cleared(&day)
        } else {
            text::nothing_to_clear(&day)
        };
        self.reply(message, OutgoingMessage::plain(reply)).await
    }
}
