//! Command-line interface definitions.

pub mod check;
pub mod output;
pub mod run;
pub mod stats;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Depobot - Telegram bot for daily deposit reports.
#[derive(Parser, Debug)]
#[command(name = "depobot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the bot (default)
    Run(RunArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),

    /// Show tracked chats and number checks from the data file
    Stats,
}

/// Subcommands for `depobot check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration and environment
    Config,
    /// Verify the bot token and message the admin
    Telegram,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug, Default)]
pub struct RunArgs {
    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,
}
