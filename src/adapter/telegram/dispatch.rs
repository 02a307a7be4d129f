//! Update conversion and the teloxide dispatcher.

use teloxide::prelude::*;
use teloxide::types::{BotCommand, Chat as TgChat, User};
use tracing::{debug, info, warn};

use crate::application::bot::DepositBot;
use crate::application::command::bot_commands;
use crate::domain::{Chat, ChatKind, IncomingCallback, IncomingMessage, MessageRef, Sender};

fn chat(chat: &TgChat) -> Chat {
    let kind = if chat.is_private() {
        ChatKind::Private
    } else if chat.is_supergroup() {
        ChatKind::Supergroup
    } else if chat.is_group() {
        ChatKind::Group
    } else {
        ChatKind::Channel
    };
    Chat {
        id: chat.id.0,
        kind,
    }
}

#[allow(clippy::cast_possible_wrap)]
fn sender(user: &User) -> Sender {
    Sender {
        id: user.id.0 as i64,
        full_name: user.full_name(),
        username: user.username.clone(),
    }
}

/// Convert a Telegram message with text or a caption.
///
/// Returns `None` for messages carrying neither.
#[must_use]
pub fn incoming_message(message: &Message) -> Option<IncomingMessage> {
    let (text, from_caption) = match (message.text(), message.caption()) {
        (Some(text), _) => (text, false),
        (None, Some(caption)) => (caption, true),
        (None, None) => return None,
    };

    Some(IncomingMessage {
        chat: chat(&message.chat),
        sender: message.from.as_ref().map(sender),
        text: text.to_string(),
        from_caption,
    })
}

/// Convert a callback query. Returns `None` when it carries no data.
#[must_use]
pub fn incoming_callback(query: &CallbackQuery) -> Option<IncomingCallback> {
    let data = query.data.clone()?;
    let origin = query.message.as_ref().map(|message| MessageRef {
        chat: chat(message.chat()),
        message_id: message.id().0,
    });

    Some(IncomingCallback {
        id: query.id.clone(),
        sender: sender(&query.from),
        origin,
        data,
    })
}

async fn on_message(service: DepositBot, message: Message) -> ResponseResult<()> {
    match incoming_message(&message) {
        Some(incoming) => service.process_message(incoming).await,
        None => debug!(chat_id = message.chat.id.0, "Ignoring message without text"),
    }
    Ok(())
}

async fn on_callback(service: DepositBot, query: CallbackQuery) -> ResponseResult<()> {
    match incoming_callback(&query) {
        Some(incoming) => service.process_callback(incoming).await,
        None => debug!(callback_id = %query.id, "Ignoring callback without data"),
    }
    Ok(())
}

fn handler() -> teloxide::dispatching::UpdateHandler<teloxide::RequestError> {
    dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback))
}

pub(super) fn dispatcher(
    bot: Bot,
    service: DepositBot,
) -> Dispatcher<Bot, teloxide::RequestError, teloxide::dispatching::DefaultKey> {
    Dispatcher::builder(bot, handler())
        .dependencies(dptree::deps![service])
        .default_handler(|update| async move {
            debug!(update_id = ?update.id, "Ignoring unhandled update kind");
        })
        .enable_ctrlc_handler()
        .build()
}

/// Register bot commands with Telegram for the "/" menu.
///
/// # Errors
///
/// Returns the Telegram request error when registration fails.
pub async fn register_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    let commands: Vec<BotCommand> = bot_commands()
        .into_iter()
        .map(|(cmd, desc)| BotCommand::new(cmd, desc))
        .collect();

    bot.set_my_commands(commands).await?;
    info!("Registered bot commands with Telegram");
    Ok(())
}

/// Receive updates by long polling until Ctrl-C.
pub async fn run_polling(bot: Bot, service: DepositBot) {
    if let Err(e) = bot.delete_webhook().await {
        warn!(error = %e, "Failed to delete webhook before polling");
    }
    if let Err(e) = register_bot_commands(&bot).await {
        warn!(error = %e, "Failed to register bot commands with Telegram");
    }

    info!("Bot started in polling mode");
    dispatcher(bot, service).dispatch().await;
    info!("Polling stopped");
}
