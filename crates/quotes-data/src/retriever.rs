//! Quote retriever: token, download and bounded retry.

use quotes_core::error::DataError;
use quotes_core::traits::{DownloadRequest, QuoteDownloader, TokenSource};
use quotes_core::types::{DateWindow, EventKind, Symbol};
use tracing::{info, warn};

use crate::retry::RetryPolicy;

/// Outcome of a retrieval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Retrieval {
    /// Raw response body. Empty when every attempt failed.
    Body(Vec<u8>),
    /// The data source handed out no token; nothing was requested.
    NoData,
}

impl Retrieval {
    /// The body, if there is one to persist.
    pub fn into_body(self) -> Option<Vec<u8>> {
        match self {
            Retrieval::Body(body) => Some(body),
            Retrieval::NoData => None,
        }
    }
}

/// Downloads a symbol's event series for a date window.
pub struct QuoteRetriever<T, D> {
    tokens: T,
    downloader: D,
    policy: RetryPolicy,
}

impl<T: TokenSource, D: QuoteDownloader> QuoteRetriever<T, D> {
    pub fn new(tokens: T, downloader: D, policy: RetryPolicy) -> Self {
        Self {
            tokens,
            downloader,
            policy,
        }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub fn token_source(&self) -> &T {
        &self.tokens
    }

    pub fn downloader(&self) -> &D {
        &self.downloader
    }

    /// Retrieve `[window.from, window.to]` for `symbol`.
    ///
    /// A fresh token is fetched before every attempt. A missing token ends
    /// the retrieval with [`Retrieval::NoData`]. Transient download failures
    /// are retried per the policy; once attempts run out the result is an
    /// empty [`Retrieval::Body`]. Any other error is returned as is.
    pub async fn retrieve(
        &self,
        symbol: &Symbol,
        window: &DateWindow,
        events: EventKind,
    ) -> Result<Retrieval, DataError> {
        let (period1, period2) = window.epoch_bounds()?;

        let mut attempts = 0;
        while attempts < self.policy.max_attempts {
            let Some(token) = self.tokens.fetch_token(symbol).await? else {
                warn!("No token for {}, skipping download", symbol);
                return Ok(Retrieval::NoData);
            };

            let request = DownloadRequest {
                symbol: symbol.clone(),
                period1,
                period2,
                events,
                token,
            };

            match self.downloader.download(&request).await {
                Ok(body) => {
                    info!("{} downloaded ({} bytes)", symbol, body.len());
                    return Ok(Retrieval::Body(body));
                }
                Err(e) if self.policy.should_retry(&e) => {
                    warn!("{} failed at attempt #{}: {}", symbol, attempts, e);
                    attempts += 1;
                    let delay = self.policy.delay_for(attempts);
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                }
                Err(e) => return Err(e),
            }
        }

        warn!(
            "{} not downloaded after {} attempts",
            symbol, self.policy.max_attempts
        );
        Ok(Retrieval::Body(Vec::new()))
    }
}
