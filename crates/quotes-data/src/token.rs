//! Token fetcher: mines the download crumb from the symbol's history page.

use async_trait::async_trait;
use quotes_core::error::DataError;
use quotes_core::traits::{AuthToken, TokenSource};
use quotes_core::types::Symbol;
use regex::Regex;
use reqwest::Client;
use tracing::{debug, warn};

use crate::http::{connection_error, join_url};

/// Marker around the token in the history page's embedded store.
pub const CRUMB_PATTERN: &str = r#"CrumbStore":\{"crumb":"(.*?)"\}"#;

/// Fetches tokens by scraping the quote history page.
pub struct CrumbFetcher {
    client: Client,
    page_url: String,
    pattern: Regex,
}

impl CrumbFetcher {
    /// Create a fetcher using the standard crumb marker.
    pub fn new(client: Client, page_url: impl Into<String>) -> Result<Self, DataError> {
        Self::with_pattern(client, page_url, CRUMB_PATTERN)
    }

    /// Create a fetcher with a custom marker. The first capture group is the token.
    pub fn with_pattern(
        client: Client,
        page_url: impl Into<String>,
        pattern: &str,
    ) -> Result<Self, DataError> {
        let pattern = Regex::new(pattern)
            .map_err(|e| DataError::Validation(format!("token pattern: {}", e)))?;
        Ok(Self {
            client,
            page_url: page_url.into(),
            pattern,
        })
    }

    /// History page URL for a symbol.
    pub fn history_url(&self, symbol: &Symbol) -> String {
        format!(
            "{}/history?p={}",
            join_url(&self.page_url, symbol.as_str()),
            symbol
        )
    }

    /// Pull the token out of a page body.
    pub fn extract(&self, body: &str) -> Option<AuthToken> {
        self.pattern
            .captures(body)
            .and_then(|caps| caps.get(1))
            .map(|m| AuthToken::new(m.as_str()))
    }
}

#[async_trait]
impl TokenSource for CrumbFetcher {
    async fn fetch_token(&self, symbol: &Symbol) -> Result<Option<AuthToken>, DataError> {
        let url = self.history_url(symbol);
        debug!("Fetching token page {}", url);

        let resp = self.client.get(&url).send().await.map_err(connection_error)?;

        if !resp.status().is_success() {
            return Err(DataError::HttpStatus {
                status: resp.status().as_u16(),
                url,
            });
        }

        let body = resp.bytes().await.map_err(connection_error)?;
        let text = String::from_utf8(body.to_vec())
            .map_err(|e| DataError::ParseError(format!("history page for {}: {}", symbol, e)))?;
        let token = self.extract(&text);
        if token.is_none() {
            warn!("No token found on history page for {}", symbol);
        }
        Ok(token)
    }
}
