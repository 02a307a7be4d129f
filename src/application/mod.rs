//! Application services (use cases).
//!
//! The bot service routes framework-agnostic updates to command,
//! conversation and report handlers and replies through the messenger port.

pub mod bot;
pub mod callback;
pub mod command;
pub mod conversation;
pub mod text;

pub use bot::{BotSettings, DepositBot};
pub use callback::CallbackAction;
pub use command::{parse_command, Command, CommandParseError};
pub use conversation::{Conversation, ConversationKey, Conversations};
