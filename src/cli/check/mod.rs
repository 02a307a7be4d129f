//! Configuration and connection validation commands.

mod config;
mod telegram;

pub use config::execute_config;
pub use telegram::execute_telegram;
