//! Core traits for the quote history fetcher.

mod source;

pub use source::{AuthToken, DownloadRequest, QuoteDownloader, TokenSource};
