//! Cache reconciler: serve a cached series or fetch, persist and serve a fresh one.

use chrono::{Local, NaiveDate};
use quotes_core::error::DataError;
use quotes_core::traits::{QuoteDownloader, TokenSource};
use quotes_core::types::{DateStyle, DateWindow, EventKind, QuoteSeries, Symbol};
use tracing::{debug, info, warn};

use crate::cache::QuoteCache;
use crate::retriever::{QuoteRetriever, Retrieval};

/// Decides between the cache file and the network for each request.
pub struct CacheReconciler<T, D> {
    retriever: QuoteRetriever<T, D>,
    cache: QuoteCache,
    date_style: DateStyle,
}

impl<T: TokenSource, D: QuoteDownloader> CacheReconciler<T, D> {
    pub fn new(retriever: QuoteRetriever<T, D>, cache: QuoteCache) -> Self {
        Self {
            retriever,
            cache,
            date_style: DateStyle::default(),
        }
    }

    /// Style used when logging date windows.
    pub fn with_date_style(mut self, date_style: DateStyle) -> Self {
        self.date_style = date_style;
        self
    }

    /// Daily series for `symbol`, windowed relative to today.
    ///
    /// # Arguments
    /// * `symbol` - Ticker; `.` is normalized to `-`
    /// * `force_refresh` - Skip the cache file even when present
    /// * `start` / `end` - Inclusive bounds; `end` defaults to today
    /// * `days` - Look-back used when `start` is absent (default 365)
    ///
    /// # Returns
    /// `None` when the data source handed out no token.
    pub async fn get_series(
        &self,
        symbol: &str,
        force_refresh: bool,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        days: Option<u32>,
    ) -> Result<Option<QuoteSeries>, DataError> {
        let symbol = Symbol::parse(symbol)?;
        let today = Local::now().date_naive();
        let window = DateWindow::resolve(start, end, days, today)?;
        self.get_window(&symbol, &window, force_refresh).await
    }

    /// Daily series for `symbol` restricted to an explicit window.
    ///
    /// A readable cache file wins unless `force_refresh` is set. An
    /// unreadable one is logged and replaced by a fresh download. Fresh
    /// bodies are written to the cache whole; only the returned series
    /// is cut to the window.
    pub async fn get_window(
        &self,
        symbol: &Symbol,
        window: &DateWindow,
        force_refresh: bool,
    ) -> Result<Option<QuoteSeries>, DataError> {
        let span = window.display(self.date_style);

        if !force_refresh && self.cache.contains(symbol) {
            match self.cache.read(symbol) {
                Ok(series) => {
                    debug!("Serving {} {} from cache", symbol, span);
                    return Ok(Some(series.slice(window)));
                }
                Err(e) => warn!(
                    "Failed from {} ({}). Now fetching {} fresh.",
                    self.cache.path_for(symbol).display(),
                    e,
                    symbol
                ),
            }
        }

        info!("downloading {} {}", symbol, span);
        match self
            .retriever
            .retrieve(symbol, window, EventKind::History)
            .await?
        {
            Retrieval::Body(body) => {
                let path = self.cache.write(symbol, &body)?;
                info!("{} written to {}", symbol, path.display());
                let series = self.cache.read(symbol)?;
                Ok(Some(series.slice(window)))
            }
            Retrieval::NoData => {
                warn!("No data available for {}", symbol);
                Ok(None)
            }
        }
    }
}
