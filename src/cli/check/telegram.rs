use std::path::Path;

use crate::cli::output;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Verify the bot token and send a test message to the admin.
#[cfg(feature = "telegram")]
pub async fn execute_telegram<P: AsRef<Path>>(config_path: P) -> Result<()> {
    use teloxide::prelude::*;

    use crate::adapter::telegram::TeloxideMessenger;
    use crate::error::DeliveryError;
    use crate::port::{Messenger, OutgoingMessage};

    let config = Config::load(config_path)?;

    output::section("Telegram Check");
    output::key_value("Bot token", output::mask(config.bot_token()));
    output::key_value("Admin ID", config.telegram.admin_id);

    let bot = Bot::new(config.bot_token());
    let me = bot
        .get_me()
        .await
        .map_err(|e| DeliveryError::Request(e.to_string()))?;
    output::ok(&format!(
        "Token accepted for @{}",
        me.username.as_deref().unwrap_or("unknown")
    ));

    let messenger = TeloxideMessenger::new(bot);
    match messenger
        .send(
            config.telegram.admin_id,
            OutgoingMessage::plain("🧪 Depobot test message. Configuration validated."),
        )
        .await
    {
        Ok(()) => {
            output::ok("Test message sent to admin");
            Ok(())
        }
        Err(e) => {
            output::error("Failed to message admin (has the admin started the bot?)");
            Err(e.into())
        }
    }
}

#[cfg(not(feature = "telegram"))]
pub async fn execute_telegram<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let _ = Config::load(config_path)?;
    output::warn("Built without the telegram feature - nothing to check");
    Ok(())
}
