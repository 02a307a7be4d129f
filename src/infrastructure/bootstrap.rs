//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::info;

use crate::adapter::store::JsonFileStore;
use crate::application::bot::DepositBot;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::{Messenger, Store};

/// Build the data store from configuration.
pub(crate) fn build_store(config: &Config) -> Arc<dyn Store> {
    info!(path = %config.data_file.display(), "Using JSON data file");
    Arc::new(JsonFileStore::new(config.data_file.clone()))
}

/// Build the bot service, loading saved data.
///
/// # Errors
///
/// Returns an error when the schedule is invalid or the data file cannot be
/// read.
pub fn build_bot(config: &Config, messenger: Arc<dyn Messenger>) -> Result<DepositBot> {
    let store = build_store(config);
    let bot = DepositBot::new(config.bot_settings()?, messenger, store)?;
    Ok(bot)
}

/// Run the bot until shutdown.
///
/// # Errors
///
/// Returns an error when startup fails.
#[cfg(feature = "telegram")]
pub async fn run(config: Config) -> Result<()> {
    use crate::adapter::telegram::{run_polling, run_webhook, TeloxideMessenger};
    use crate::infrastructure::config::telegram::UpdateMode;
    use teloxide::Bot;

    let bot = Bot::new(config.bot_token());
    let messenger: Arc<dyn Messenger> = Arc::new(TeloxideMessenger::new(bot.clone()));
    let service = build_bot(&config, messenger)?;

    info!(
        admin_id = config.telegram.admin_id,
        mode = ?config.telegram.mode,
        "Deposit bot configured"
    );

    match config.telegram.mode {
        UpdateMode::Polling => {
            run_polling(bot, service).await;
            Ok(())
        }
        UpdateMode::Webhook => {
            let endpoint = config.telegram.webhook_endpoint()?;
            run_webhook(bot, service, endpoint, config.telegram.port).await
        }
    }
}

/// Run the bot until shutdown (no Telegram support compiled in).
///
/// # Errors
///
/// Always succeeds; logs that nothing can run.
#[cfg(not(feature = "telegram"))]
pub async fn run(_config: Config) -> Result<()> {
    tracing::warn!("Built without the telegram feature - nothing to run");
    Ok(())
}
