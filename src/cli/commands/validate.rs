//! Validate configuration command.

use anyhow::Result;
use std::path::Path;
use quotes_config::load_config;

pub async fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match load_config(config_path) {
        Ok(config) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("Quote page: {}", config.source.page_url);
            println!("Download endpoint: {}", config.source.download_url);
            println!(
                "Retry: {} attempts, {}s linear backoff step",
                config.retry.max_attempts, config.retry.backoff_step_secs
            );
            println!("Cache directory: {}", config.cache.dir.display());
            println!("Date style: {:?}", config.cache.date_style);
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
