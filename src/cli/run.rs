//! Handler for the `run` command.

use std::path::Path;

use tokio::signal;
use tracing::{error, info};

use crate::cli::RunArgs;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::logging::LogFormat;
use crate::infrastructure::config::settings::Config;

/// Execute the run command.
pub async fn execute(config_path: &Path, args: &RunArgs) -> Result<()> {
    let mut config = Config::load(config_path)?;

    if let Some(ref level) = args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.format = LogFormat::Json;
    }

    config.init_logging();

    info!(
        mode = ?config.telegram.mode,
        data_file = %config.data_file.display(),
        "depobot starting"
    );

    tokio::select! {
        result = bootstrap::run(config) => {
            if let Err(e) = result {
                error!(error = %e, "Fatal error");
                return Err(e);
            }
        }
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("depobot stopped");
    Ok(())
}
