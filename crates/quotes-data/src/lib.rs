//! Quote download and cache reconciliation.
//!
//! [`CacheReconciler`] is the entry point: it serves `<cache_dir>/<SYMBOL>.csv`
//! when present and otherwise runs a [`QuoteRetriever`] (token fetch,
//! download, linear-backoff retry) and persists the raw body first.

mod cache;
mod csv_source;
mod download;
mod http;
mod reconciler;
mod retriever;
mod retry;
mod token;

pub use cache::QuoteCache;
pub use csv_source::{load_series, parse_series, write_series};
pub use download::CsvDownloader;
pub use http::{build_client, SourceConfig};
pub use reconciler::CacheReconciler;
pub use retriever::{QuoteRetriever, Retrieval};
pub use retry::{Backoff, RetryPolicy};
pub use token::{CrumbFetcher, CRUMB_PATTERN};

use chrono::NaiveDate;
use quotes_core::error::DataError;
use quotes_core::types::QuoteSeries;
use std::path::PathBuf;

/// Cache directory used when none is configured.
pub const DEFAULT_CACHE_DIR: &str = "../data";

/// Reconciler over the live HTTP source.
pub type HttpReconciler = CacheReconciler<CrumbFetcher, CsvDownloader>;

/// Wire a reconciler to the HTTP endpoints in `source`.
pub fn http_reconciler(
    source: &SourceConfig,
    policy: RetryPolicy,
    cache_dir: impl Into<PathBuf>,
) -> Result<HttpReconciler, DataError> {
    let client = build_client(source)?;
    let tokens = CrumbFetcher::new(client.clone(), source.page_url.as_str())?;
    let downloader = CsvDownloader::new(client, source.download_url.as_str());

    Ok(CacheReconciler::new(
        QuoteRetriever::new(tokens, downloader, policy),
        QuoteCache::new(cache_dir),
    ))
}

/// Fetch a daily series with default endpoints, retry policy and cache directory.
pub async fn get_data(
    symbol: &str,
    is_fresh: bool,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    days: Option<u32>,
) -> Result<Option<QuoteSeries>, DataError> {
    let reconciler = http_reconciler(
        &SourceConfig::default(),
        RetryPolicy::default(),
        DEFAULT_CACHE_DIR,
    )?;
    reconciler.get_series(symbol, is_fresh, start, end, days).await
}
