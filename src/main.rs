use clap::Parser;

use depobot::cli::{check, run, stats, CheckCommand, Cli, Commands, RunArgs};
use depobot::error::Result;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    if let Err(e) = dispatch(&cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn dispatch(cli: &Cli) -> Result<()> {
    match &cli.command {
        None => run::execute(&cli.config, &RunArgs::default()).await,
        Some(Commands::Run(args)) => run::execute(&cli.config, args).await,
        Some(Commands::Check(CheckCommand::Config)) => check::execute_config(&cli.config),
        Some(Commands::Check(CheckCommand::Telegram)) => {
            check::execute_telegram(&cli.config).await
        }
        Some(Commands::Stats) => stats::execute(&cli.config),
    }
}
