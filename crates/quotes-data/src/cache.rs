//! On-disk cache of raw download bodies, one CSV file per symbol.

use quotes_core::error::DataError;
use quotes_core::types::{QuoteSeries, Symbol};
use std::fs;
use std::path::PathBuf;

use crate::csv_source::load_series;

/// Directory of `<SYMBOL>.csv` files.
#[derive(Debug, Clone)]
pub struct QuoteCache {
    cache_dir: PathBuf,
}

impl QuoteCache {
    /// Create a cache rooted at `cache_dir`. The directory is created on first write.
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }

    /// Cache file for a symbol.
    pub fn path_for(&self, symbol: &Symbol) -> PathBuf {
        self.cache_dir.join(symbol.cache_file_name())
    }

    /// Whether a cache file exists for the symbol.
    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.path_for(symbol).is_file()
    }

    /// Parse the cached file.
    pub fn read(&self, symbol: &Symbol) -> Result<QuoteSeries, DataError> {
        let path = self.path_for(symbol);
        if !path.is_file() {
            return Err(DataError::NoDataAvailable);
        }
        load_series(symbol, &path)
    }

    /// Replace the cached file with `body`, byte for byte.
    pub fn write(&self, symbol: &Symbol, body: &[u8]) -> Result<PathBuf, DataError> {
        fs::create_dir_all(&self.cache_dir).map_err(|e| {
            DataError::CacheError(format!("{}: {}", self.cache_dir.display(), e))
        })?;

        let path = self.path_for(symbol);
        fs::write(&path, body)?;
        Ok(path)
    }
}
