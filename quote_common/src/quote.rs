//! Quote data model and JSON encoding helpers.
//!
//! A `Quote` is the normalized record every provider adapter produces: which
//! provider answered, the pair as requested, the last close and its timestamp.

use serde::{Deserialize, Serialize};

use crate::error::QuoteError;
use crate::source::Source;

/// Latest price for a currency pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Provider identifier (string form of `Source`).
    pub source: String,
    /// Currency pair exactly as the caller requested it (e.g., `EURUSD`).
    pub pair: String,
    /// Most recent non-missing close price.
    pub last: f64,
    /// Timestamp of `last`; format and precision depend on the provider.
    pub ts: String,
}

impl Quote {
    /// Build a quote tagged with the provider that produced it.
    pub fn new(source: Source, pair: &str, last: f64, ts: impl Into<String>) -> Self {
        Quote {
            source: source.to_string(),
            pair: pair.to_string(),
            last,
            ts: ts.into(),
        }
    }

    /// Encode the quote as indented JSON.
    pub fn to_pretty_json(&self) -> Result<String, QuoteError> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }
}
