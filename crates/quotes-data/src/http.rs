//! HTTP client shared by the token fetcher and the downloader.

use quotes_core::error::DataError;
use reqwest::Client;
use std::time::Duration;

/// Upstream endpoints and client settings.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Base of the quote pages; the history page is `<base>/<SYMBOL>/history`
    pub page_url: String,
    /// Base of the CSV download endpoint; requests go to `<base>/<SYMBOL>`
    pub download_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            page_url: "https://finance.yahoo.com/quote".to_string(),
            download_url: "https://query1.finance.yahoo.com/v7/finance/download".to_string(),
            timeout: Duration::from_secs(30),
            user_agent: "Mozilla/5.0 (X11; Linux x86_64) quotes/0.1".to_string(),
        }
    }
}

/// Build the client. The cookie store carries the session cookie set by the
/// history page over to the download request.
pub fn build_client(config: &SourceConfig) -> Result<Client, DataError> {
    Client::builder()
        .cookie_store(true)
        .timeout(config.timeout)
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(|e| DataError::ConnectionError(e.to_string()))
}

/// Join a base URL and a path segment.
pub(crate) fn join_url(base: &str, segment: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), segment)
}

/// Map a transport failure.
pub(crate) fn connection_error(err: reqwest::Error) -> DataError {
    DataError::ConnectionError(err.to_string())
}
