//! Configuration management.

mod settings;

pub use settings::{
    AppConfig, AppSettings, CacheSettings, LoggingConfig, RetrySettings, SourceSettings,
};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Load configuration from file and environment.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    build(path, true)
}

/// Like [`load_config`], but a missing file falls back to defaults.
pub fn load_config_or_default(path: &Path) -> Result<AppConfig, ConfigError> {
    build(path, false)
}

fn build(path: &Path, required: bool) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(required))
        .add_source(
            Environment::with_prefix("QUOTES")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let settings: AppConfig = config.try_deserialize()?;
    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotes_core::types::DateStyle;
    use std::path::PathBuf;

    #[test]
    fn test_missing_file_required() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(&dir.path().join("absent.toml")).is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.retry.max_attempts, 5);
        assert_eq!(config.cache.dir, PathBuf::from("../data"));
    }

    #[test]
    fn test_partial_file_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.toml");
        std::fs::write(
            &path,
            r#"
[cache]
dir = "/var/cache/quotes"
date_style = "iso"

[retry]
backoff_step_secs = 0
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.cache.dir, PathBuf::from("/var/cache/quotes"));
        assert_eq!(config.cache.date_style, DateStyle::Iso);
        assert_eq!(config.cache.default_days, 365);
        assert_eq!(config.retry.max_attempts, 5);
        assert_eq!(config.retry.backoff_step_secs, 0);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_zero_attempts_fail_to_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.toml");
        std::fs::write(&path, "[retry]\nmax_attempts = 0\n").unwrap();

        assert!(load_config(&path).is_err());
        assert!(load_config_or_default(&path).is_err());
    }

    #[test]
    fn test_default_config_round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.toml");
        std::fs::write(&path, AppConfig::default().to_toml().unwrap()).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.source.page_url, AppConfig::default().source.page_url);
        assert_eq!(config.cache.date_style, DateStyle::Unpadded);
    }
}
