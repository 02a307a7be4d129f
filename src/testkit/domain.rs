//! Builders for incoming updates used across tests.

use crate::domain::{Chat, ChatKind, IncomingCallback, IncomingMessage, MessageRef, Sender};

/// A private chat; its id equals the user id.
pub fn private_chat(user_id: i64) -> Chat {
    Chat {
        id: user_id,
        kind: ChatKind::Private,
    }
}

/// A supergroup chat.
pub fn group_chat(chat_id: i64) -> Chat {
    Chat {
        id: chat_id,
        kind: ChatKind::Supergroup,
    }
}

/// A sender named `User {id}` without a username.
pub fn sender(user_id: i64) -> Sender {
    Sender {
        id: user_id,
        full_name: format!("User {user_id}"),
        username: None,
    }
}

/// A text message from `user_id` in `chat`.
pub fn text(chat: Chat, user_id: i64, text: &str) -> IncomingMessage {
    IncomingMessage {
        chat,
        sender: Some(sender(user_id)),
        text: text.to_string(),
        from_caption: false,
    }
}

/// A media caption from `user_id` in `chat`.
pub fn caption(chat: Chat, user_id: i64, text: &str) -> IncomingMessage {
    IncomingMessage {
        from_caption: true,
        ..self::text(chat, user_id, text)
    }
}

/// A button press by `user_id` on bot message `message_id` in `chat`.
pub fn press(chat: Chat, user_id: i64, message_id: i32, data: &str) -> IncomingCallback {
    IncomingCallback {
        id: format!("cb-{user_id}-{message_id}"),
        sender: sender(user_id),
        origin: Some(MessageRef { chat, message_id }),
        data: data.to_string(),
    }
}
