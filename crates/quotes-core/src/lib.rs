//! Core types and traits for the quote history fetcher.
//!
//! This crate provides the foundational building blocks including:
//! - Request types (Symbol, DateWindow, EventKind)
//! - Daily quote rows and series (QuoteRecord, QuoteSeries)
//! - The token and download seams used by the retriever

pub mod types;
pub mod traits;
pub mod error;

pub use error::DataError;
pub use types::*;
pub use traits::*;
