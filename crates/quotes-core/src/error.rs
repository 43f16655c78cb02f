//! Error types for the quote history fetcher.

use thiserror::Error;

/// Data source errors.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("No data available for the requested range")]
    NoDataAvailable,

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DataError {
    /// Whether a download attempt that failed with this error may be retried.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            DataError::ConnectionError(_) | DataError::HttpStatus { .. }
        )
    }
}
