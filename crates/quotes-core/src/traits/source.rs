//! Token and download seams of the quote retriever.

use crate::error::DataError;
use crate::types::{EventKind, Symbol};
use async_trait::async_trait;
use std::fmt;

/// Short-lived credential required by the download endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Redacted: request structs are debug-logged.
impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthToken(<{} chars>)", self.0.len())
    }
}

/// One download request, already reduced to wire values.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadRequest {
    /// Normalized symbol
    pub symbol: Symbol,
    /// Start of the window (UTC epoch seconds, inclusive)
    pub period1: i64,
    /// End of the window (UTC epoch seconds, exclusive)
    pub period2: i64,
    /// Event series to request
    pub events: EventKind,
    /// Token fetched for this attempt
    pub token: AuthToken,
}

/// Source of authentication tokens.
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Fetch a fresh token for `symbol`.
    ///
    /// # Returns
    /// `Ok(None)` when the page carries no token. Network failures are
    /// returned as errors and are not retried by callers.
    async fn fetch_token(&self, symbol: &Symbol) -> Result<Option<AuthToken>, DataError>;
}

/// Performs a single download request.
#[async_trait]
pub trait QuoteDownloader: Send + Sync {
    /// Issue the request and return the raw response body.
    ///
    /// Errors for which [`DataError::is_transient`] holds are retried by
    /// the caller.
    async fn download(&self, request: &DownloadRequest) -> Result<Vec<u8>, DataError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_debug_hides_value() {
        let token = AuthToken::new("s3cr3tCrumb");
        let debug = format!("{:?}", token);
        assert!(!debug.contains("s3cr3t"));
        assert_eq!(token.as_str(), "s3cr3tCrumb");
    }
}
