//! Telegram adapter built on teloxide.
//!
//! Requires the `telegram` feature to be enabled.

mod dispatch;
mod messenger;
mod webhook;

pub use dispatch::{incoming_callback, incoming_message, register_bot_commands, run_polling};
pub use messenger::TeloxideMessenger;
pub use webhook::{health_router, run_webhook, HEALTH_TEXT};
