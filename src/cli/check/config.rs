use std::path::Path;

use crate::cli::output;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::config::telegram::UpdateMode;

/// Validate configuration without starting the bot.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    output::section("Configuration Check");
    output::key_value("File", path.display());
    if !path.exists() {
        output::warn("Configuration file not found, using defaults and environment");
    }

    let config = Config::load(path)?;
    let clock = config.bot_settings()?.clock;

    output::ok("Configuration is valid");
    output::key_value("Bot token", output::mask(config.bot_token()));
    output::key_value("Admin ID", config.telegram.admin_id);
    output::key_value("Data file", config.data_file.display());
    output::key_value("UTC offset", clock.offset());
    output::key_value("Day cutoff", clock.cutoff());
    output::key_value("Report day", clock.current_key());

    match config.telegram.mode {
        UpdateMode::Polling => output::key_value("Mode", "polling"),
        UpdateMode::Webhook => {
            output::key_value("Mode", "webhook");
            output::key_value("Webhook", config.telegram.webhook_endpoint()?);
            output::key_value("Port", config.telegram.port);
        }
    }
    Ok(())
}
