//! The deposit report bot.
//!
//! [`DepositBot`] receives framework-agnostic updates, routes them to the
//! command, conversation and free-text handlers, and talks back through a
//! [`Messenger`]. Bot data mutations are flushed to the [`Store`] right
//! away.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, error, warn};

use crate::domain::{BotData, Chat, ChatKind, IncomingCallback, IncomingMessage, ReportClock};
use crate::error::{Error, Result, StoreError};
use crate::port::{Messenger, OutgoingMessage, Store};

use super::callback::CallbackAction;
use super::command::{parse_command, Command, CommandParseError};
use super::conversation::{Conversation, ConversationKey, Conversations};
use super::text;

mod admin;
mod broadcast;
mod commission;
mod data;
mod feedback;
mod menu;

/// Static settings for the bot.
#[derive(Debug, Clone, Copy)]
pub struct BotSettings {
    /// Telegram user id allowed to run admin commands and receive feedback.
    pub admin_id: i64,
    pub clock: ReportClock,
}

/// Deposit report bot service.
#[derive(Clone)]
pub struct DepositBot {
    messenger: Arc<dyn Messenger>,
    store: Arc<dyn Store>,
    data: Arc<RwLock<BotData>>,
    conversations: Arc<Conversations>,
    settings: BotSettings,
}

impl DepositBot {
    /// Create a bot, loading saved data from the store.
    pub fn new(
        settings: BotSettings,
        messenger: Arc<dyn Messenger>,
        store: Arc<dyn Store>,
    ) -> std::result::Result<Self, StoreError> {
        let data = store.load()?;
        Ok(Self {
            messenger,
            store,
            data: Arc::new(RwLock::new(data)),
            conversations: Arc::new(Conversations::new()),
            settings,
        })
    }

    #[must_use]
    pub fn settings(&self) -> BotSettings {
        self.settings
    }

    /// Copy of the current bot data.
    #[must_use]
    pub fn snapshot(&self) -> BotData {
        self.data.read().clone()
    }

    #[must_use]
    pub fn conversation(&self, chat_id: i64, user_id: i64) -> Option<Conversation> {
        self.conversations
            .get(ConversationKey::new(chat_id, user_id))
    }

    /// Handle a message, reporting any failure to the admin instead of
    /// returning it.
    pub async fn process_message(&self, message: IncomingMessage) {
        let chat_id = message.chat.id;
        if let Err(err) = self.handle_message(message).await {
            self.report_failure(&err, "message", Some(chat_id)).await;
        }
    }

    /// Handle a button press, reporting any failure to the admin instead of
    /// returning it.
    pub async fn process_callback(&self, callback: IncomingCallback) {
        let user_id = callback.sender.id;
        if let Err(err) = self.handle_callback(callback).await {
            self.report_failure(&err, "callback query", Some(user_id)).await;
        }
    }

    /// Route one incoming text message or caption.
    pub async fn handle_message(&self, message: IncomingMessage) -> Result<()> {
        if !message.from_caption {
            match parse_command(&message.text) {
                Ok(command) => return self.handle_command(&message, command).await,
                Err(CommandParseError::UnknownCommand(command)) => {
                    debug!(chat_id = message.chat.id, command = %command, "Ignoring unknown command");
                    return Ok(());
                }
                Err(CommandParseError::NotACommand) => {}
            }

            let key = self.key_for(&message);
            if let Some(conversation) = self.conversations.get(key) {
                if conversation.awaits_text() {
                    return self.continue_conversation(&message, key, conversation).await;
                }
            }
        }

        self.register_chat(message.chat)?;
        self.collect(&message).await
    }

    async fn handle_command(&self, message: &IncomingMessage, command: Command) -> Result<()> {
        debug!(chat_id = message.chat.id, command = ?command, "Handling command");
        match command {
            Command::Start | Command::Menu => self.show_menu(message).await,
            Command::Help => self.show_help(message).await,
            Command::Form => self.show_form(message).await,
            Command::HideMenu => self.hide_menu(message).await,
            Command::ShowData => self.show_data(message).await,
            Command::ClearData => self.clear_data(message).await,
            Command::Check(argument) => self.check_command(message, argument.as_deref()).await,
            Command::Commission => self.start_commission(message).await,
            Command::Feedback => self.start_feedback(message).await,
            Command::Cancel => self.cancel(message).await,
            Command::Settings => self.show_settings(message).await,
            Command::Stats => self.show_stats(message).await,
            Command::ListGroups => self.list_groups(message).await,
            Command::Broadcast(Some(body)) => self.broadcast_all(message, &body).await,
            Command::Broadcast(None) => self.start_broadcast(message).await,
        }
    }

    async fn continue_conversation(
        &self,
        message: &IncomingMessage,
        key: ConversationKey,
        conversation: Conversation,
    ) -> Result<()> {
        match conversation {
            Conversation::Commission { kind } => {
                self.calculate_commission(message, key, kind).await
            }
            Conversation::Feedback => self.forward_feedback(message, key).await,
            Conversation::BroadcastCompose { target, name } => {
                self.compose_broadcast(message, key, target, name).await
            }
            Conversation::BroadcastSelect | Conversation::BroadcastConfirm { .. } => Ok(()),
        }
    }

    /// `/cancel`: end whatever conversation is active.
    async fn cancel(&self, message: &IncomingMessage) -> Result<()> {
        if self.conversations.end(self.key_for(message)).is_none() {
            return Ok(());
        }
        self.reply(message, OutgoingMessage::plain(text::ACTION_CANCELLED))
            .await
    }

    /// Route one inline button press.
    pub async fn handle_callback(&self, callback: IncomingCallback) -> Result<()> {
        let Some(action) = CallbackAction::parse(&callback.data) else {
            warn!(data = %callback.data, "Ignoring unknown callback data");
            self.messenger.answer_callback(&callback.id).await?;
            return Ok(());
        };

        match action {
            CallbackAction::ClearGroup(group_id) => self.clear_group(&callback, group_id).await,
            CallbackAction::AdminCancel => self.cancel_group_action(&callback).await,
            _ => self.continue_callback_conversation(&callback, action).await,
        }
    }

    async fn continue_callback_conversation(
        &self,
        callback: &IncomingCallback,
        action: CallbackAction,
    ) -> Result<()> {
        let key = callback
            .origin
            .map(|origin| ConversationKey::new(origin.chat.id, callback.sender.id));
        let conversation = key.and_then(|key| self.conversations.get(key));

        match (key, conversation, action) {
            (Some(key), Some(Conversation::Commission { .. }), CallbackAction::CommissionKind(kind)) => {
                self.select_commission_kind(callback, key, kind).await
            }
            (Some(key), Some(Conversation::Commission { .. }), CallbackAction::CommissionCancel) => {
                self.cancel_commission(callback, key).await
            }
            (Some(key), Some(Conversation::BroadcastSelect), CallbackAction::BroadcastTarget(target)) => {
                self.select_broadcast_target(callback, key, target).await
            }
            (
                Some(key),
                Some(Conversation::BroadcastConfirm {
                    target,
                    name,
                    message,
                }),
                CallbackAction::BroadcastConfirm,
            ) => {
                self.confirm_broadcast(callback, key, target, &name, &message)
                    .await
            }
            (Some(key), Some(conversation), CallbackAction::BroadcastCancel)
                if conversation.is_broadcast() =>
            {
                self.cancel_broadcast(callback, key).await
            }
            _ => {
                debug!(
                    user_id = callback.sender.id,
                    action = ?action,
                    "Ignoring button outside its conversation"
                );
                self.messenger.answer_callback(&callback.id).await?;
                Ok(())
            }
        }
    }

    /// Tell the admin about a failed update.
    pub async fn report_failure(&self, err: &Error, context: &str, chat_id: Option<i64>) {
        error!(error = %err, context, chat_id, "Exception while handling an update");

        let report = text::error_report(&err.to_string(), context, chat_id);
        if let Err(e) = self
            .messenger
            .send(self.settings.admin_id, OutgoingMessage::plain(report))
            .await
        {
            error!(error = %e, "Failed to send error message to admin");
        }
    }

    fn key_for(&self, message: &IncomingMessage) -> ConversationKey {
        ConversationKey::new(message.chat.id, message.sender_id())
    }

    fn is_admin(&self, user_id: i64) -> bool {
        user_id == self.settings.admin_id
    }

    async fn reply(&self, message: &IncomingMessage, outgoing: OutgoingMessage) -> Result<()> {
        self.messenger.send(message.chat.id, outgoing).await?;
        Ok(())
    }

    /// Edit the message that carried the pressed button, if it is still
    /// reachable.
    async fn edit_origin(&self, callback: &IncomingCallback, outgoing: OutgoingMessage) -> Result<()> {
        if let Some(origin) = callback.origin {
            self.messenger.edit(origin, outgoing).await?;
        }
        Ok(())
    }

    /// Apply a mutation to the bot data and persist the result.
    ///
    /// The save runs under the write lock so snapshots reach the store in
    /// mutation order. It blocks the calling worker for the duration of the
    /// file write.
    fn mutate<R>(&self, apply: impl FnOnce(&mut BotData) -> R) -> std::result::Result<R, StoreError> {
        let mut data = self.data.write();
        let result = apply(&mut data);
        self.store.save(&data)?;
        Ok(result)
    }

    /// Track a chat for broadcasts and stats.
    fn register_chat(&self, chat: Chat) -> std::result::Result<(), StoreError> {
        if chat.kind == ChatKind::Channel || self.data.read().is_tracked(chat.id) {
            return Ok(());
        }

        if self.mutate(|data| data.register_chat(chat.id, chat.kind))? {
            debug!(chat_id = chat.id, kind = ?chat.kind, "Tracking new chat");
        }
        Ok(())
    }
}
