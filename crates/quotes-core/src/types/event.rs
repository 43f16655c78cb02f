//! Historical event series kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which class of historical events to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EventKind {
    /// Daily price history
    #[serde(rename = "history")]
    #[default]
    History,
    /// Dividend payments
    #[serde(rename = "div")]
    Dividends,
    /// Stock splits
    #[serde(rename = "split")]
    Splits,
}

impl EventKind {
    /// Value of the `events` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::History => "history",
            EventKind::Dividends => "div",
            EventKind::Splits => "split",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "history" => Ok(EventKind::History),
            "div" | "dividends" => Ok(EventKind::Dividends),
            "split" | "splits" => Ok(EventKind::Splits),
            _ => Err(format!("Unknown event kind: {}", s)),
        }
    }
}
