//! Inclusive calendar date windows and their string rendering.

use chrono::{Datelike, Days, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DataError;

/// Look-back used when neither a start nor a day count is given.
pub const DEFAULT_DAYS: u32 = 365;

/// How dates are rendered in window descriptions and output.
///
/// `Unpadded` (`2020-5-9`) is the format historical cache consumers were
/// written against. `Iso` (`2020-05-09`) is opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    #[default]
    Unpadded,
    Iso,
}

impl DateStyle {
    /// Render a date. Every date string this crate produces goes through here.
    pub fn format(&self, date: NaiveDate) -> String {
        match self {
            DateStyle::Unpadded => format!("{}-{}-{}", date.year(), date.month(), date.day()),
            DateStyle::Iso => date.format("%Y-%m-%d").to_string(),
        }
    }

    /// Parse a `year-month-day` string, with or without zero padding.
    pub fn parse(s: &str) -> Result<NaiveDate, DataError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|e| DataError::InvalidDate(format!("{}: {}", s, e)))
    }
}

/// Inclusive range of calendar dates.
///
/// No ordering check is made: a window with `from > to` is legal and simply
/// matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateWindow {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// The `days` days ending at `today`, both ends included.
    pub fn last_days(days: u32, today: NaiveDate) -> Result<Self, DataError> {
        let from = today
            .checked_sub_days(Days::new(u64::from(days)))
            .ok_or_else(|| DataError::InvalidDate(format!("{} days before {}", days, today)))?;
        Ok(Self::new(from, today))
    }

    /// Resolve optional request bounds against `today`.
    ///
    /// - no bounds: the `days` (default 365) days ending today
    /// - start only: start through today
    /// - both: taken literally
    /// - end only: the `days` days ending at `end`
    pub fn resolve(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        days: Option<u32>,
        today: NaiveDate,
    ) -> Result<Self, DataError> {
        let days = days.unwrap_or(DEFAULT_DAYS);
        match (start, end) {
            (None, None) => Self::last_days(days, today),
            (Some(from), None) => Ok(Self::new(from, today)),
            (Some(from), Some(to)) => Ok(Self::new(from, to)),
            (None, Some(to)) => Self::last_days(days, to),
        }
    }

    /// Whether `date` falls inside the window.
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    /// Request bounds in UTC epoch seconds: midnight of `from` and midnight
    /// of the day after `to`, i.e. the half-open range `[from, to + 1 day)`.
    pub fn epoch_bounds(&self) -> Result<(i64, i64), DataError> {
        let next_day = self
            .to
            .succ_opt()
            .ok_or_else(|| DataError::InvalidDate(format!("no day after {}", self.to)))?;
        Ok((midnight_utc(self.from), midnight_utc(next_day)))
    }

    /// Render as `from..to` in the given style.
    pub fn display(&self, style: DateStyle) -> String {
        format!("{}..{}", style.format(self.from), style.format(self.to))
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display(DateStyle::default()))
    }
}

fn midnight_utc(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}
