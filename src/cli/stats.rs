//! Handler for the `stats` command.

use std::path::Path;

use crate::adapter::store::JsonFileStore;
use crate::cli::output;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::Store;

/// Print counters from the data file without starting the bot.
pub fn execute(config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;
    let store = JsonFileStore::new(config.data_file.clone());
    let data = store.load()?;
    let stats = data.stats();

    output::section("Bot Data");
    output::key_value("Data file", config.data_file.display());
    output::key_value("Users", stats.users);
    output::key_value("Groups", stats.groups);
    output::key_value("Checked", stats.checked_numbers);

    let day = config.bot_settings()?.clock.current_key();
    let reports_today: usize = data
        .group_data
        .values()
        .filter_map(|days| days.get(&day))
        .map(Vec::len)
        .sum();
    output::key_value("Report day", &day);
    output::key_value("Reports", reports_today);
    Ok(())
}
