//! Quote history CLI application.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use quotes_config::load_config_or_default;
use quotes_monitor::setup_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config_or_default(&cli.config);

    // Setup logging
    let logging = config
        .as_ref()
        .map(|c| c.logging.clone())
        .unwrap_or_default();
    let log_level = match cli.log_level {
        Some(level) => level.as_str().to_string(),
        None => logging.level.clone(),
    };
    let _log_guard = setup_logging(
        &log_level,
        cli.json_logs || logging.is_json(),
        logging.file.as_deref(),
    );

    // Execute command
    match cli.command {
        Commands::Fetch(args) => {
            let config = config
                .with_context(|| format!("Failed to load configuration {:?}", cli.config))?;
            cli::commands::fetch::run(args, &config).await
        }
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config).await,
        Commands::DefaultConfig => cli::commands::default_config::run(),
    }
}
