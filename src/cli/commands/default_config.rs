//! Print the default configuration.

use anyhow::{Context, Result};
use quotes_config::AppConfig;

pub fn run() -> Result<()> {
    let toml = AppConfig::default()
        .to_toml()
        .context("Failed to render default configuration")?;
    print!("{}", toml);
    Ok(())
}
