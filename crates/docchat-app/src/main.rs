use anyhow::Result;
use clap::Parser;

use docchat::app::{run_repl_mode, run_task_mode, setup_from_cli};
use docchat::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let app_config = setup_from_cli(&cli)?;

    // A message without --interactive is answered once, then we exit
    match cli.message.clone() {
        Some(message) if !cli.interactive => run_task_mode(app_config, message).await,
        initial => run_repl_mode(app_config, initial).await,
    }
}
