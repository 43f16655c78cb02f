//! Core data types for the quote history fetcher.

mod event;
mod quote;
mod symbol;
mod window;

pub use event::EventKind;
pub use quote::{QuoteRecord, QuoteSeries};
pub use symbol::Symbol;
pub use window::{DateStyle, DateWindow, DEFAULT_DAYS};
