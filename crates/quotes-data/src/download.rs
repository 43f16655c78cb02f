//! CSV download endpoint.

use async_trait::async_trait;
use quotes_core::error::DataError;
use quotes_core::traits::{DownloadRequest, QuoteDownloader};
use reqwest::Client;
use tracing::debug;

use crate::http::{connection_error, join_url};

/// Bar interval requested from the endpoint.
const INTERVAL: &str = "1d";

/// Downloads raw CSV bodies.
pub struct CsvDownloader {
    client: Client,
    download_url: String,
}

impl CsvDownloader {
    pub fn new(client: Client, download_url: impl Into<String>) -> Self {
        Self {
            client,
            download_url: download_url.into(),
        }
    }

    fn query(request: &DownloadRequest) -> [(&'static str, String); 5] {
        [
            ("period1", request.period1.to_string()),
            ("period2", request.period2.to_string()),
            ("interval", INTERVAL.to_string()),
            ("events", request.events.as_str().to_string()),
            ("crumb", request.token.as_str().to_string()),
        ]
    }
}

#[async_trait]
impl QuoteDownloader for CsvDownloader {
    async fn download(&self, request: &DownloadRequest) -> Result<Vec<u8>, DataError> {
        let url = join_url(&self.download_url, request.symbol.as_str());
        debug!(
            "Downloading {} period1={} period2={} events={}",
            url, request.period1, request.period2, request.events
        );

        let resp = self
            .client
            .get(&url)
            .query(&Self::query(request))
            .send()
            .await
            .map_err(connection_error)?;

        if !resp.status().is_success() {
            return Err(DataError::HttpStatus {
                status: resp.status().as_u16(),
                url,
            });
        }

        let body = resp.bytes().await.map_err(connection_error)?;
        Ok(body.to_vec())
    }
}
