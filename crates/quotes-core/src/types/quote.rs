//! Daily quote rows and series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{DateWindow, Symbol};

/// One trading day: date, adjusted close and traded volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// Trading day
    pub date: NaiveDate,
    /// Close adjusted for splits and dividends
    pub adj_close: f64,
    /// Shares traded
    pub volume: u64,
}

impl QuoteRecord {
    pub fn new(date: NaiveDate, adj_close: f64, volume: u64) -> Self {
        Self {
            date,
            adj_close,
            volume,
        }
    }
}

/// Date-ordered quotes for a single symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteSeries {
    /// Symbol identifier
    pub symbol: Symbol,
    records: Vec<QuoteRecord>,
}

impl QuoteSeries {
    /// Create a series; records are ordered by date.
    pub fn new(symbol: Symbol, mut records: Vec<QuoteRecord>) -> Self {
        records.sort_by_key(|r| r.date);
        Self { symbol, records }
    }

    /// Records whose date lies in `window`, both ends included.
    pub fn slice(&self, window: &DateWindow) -> QuoteSeries {
        let records = self
            .records
            .iter()
            .filter(|r| window.contains(r.date))
            .copied()
            .collect();
        Self {
            symbol: self.symbol.clone(),
            records,
        }
    }

    /// Get the number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the series is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[QuoteRecord] {
        &self.records
    }

    pub fn first(&self) -> Option<&QuoteRecord> {
        self.records.first()
    }

    pub fn last(&self) -> Option<&QuoteRecord> {
        self.records.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuoteRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a QuoteSeries {
    type Item = &'a QuoteRecord;
    type IntoIter = std::slice::Iter<'a, QuoteRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
