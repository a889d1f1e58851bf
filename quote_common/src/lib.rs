//!
//! Common types shared by the quote fetcher and its provider adapters.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `source` — identifiers of the providers a quote can come from.
//! - `quote` — the normalized `Quote` record printed by the fetcher.
//! - `series` — price rows and the latest-close lookup.
//! - `pair` — currency pair defaults and input normalization.
#![warn(missing_docs)]
pub mod error;
pub mod pair;
pub mod quote;
pub mod result;
pub mod series;
pub mod source;

pub use error::QuoteError;
pub use quote::Quote;
pub use result::Result;
pub use source::Source;
