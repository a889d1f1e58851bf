//! Provider fallback chain.
//!
//! `QuoteFetcher` walks its adapters in priority order and returns the first
//! quote that comes back. Failures of every adapter but the last are logged and
//! skipped, whatever their kind; the last adapter's failure is returned to the
//! caller unchanged.
use log::{debug, warn};
use quote_common::{Quote, QuoteError, Result};

use crate::provider::QuoteProvider;

/// Ordered list of provider adapters with first-success semantics.
pub struct QuoteFetcher {
    providers: Vec<Box<dyn QuoteProvider>>,
}

impl QuoteFetcher {
    /// Create a fetcher that tries `providers` front to back.
    pub fn new(providers: Vec<Box<dyn QuoteProvider>>) -> Self {
        QuoteFetcher { providers }
    }

    /// Fetch the latest quote for `pair`.
    ///
    /// Returns the first successful adapter's quote. Adapters after it are
    /// never invoked. If every adapter fails, the error of the last one is
    /// returned.
    pub fn fetch(&self, pair: &str) -> Result<Quote> {
        let Some((last, fallbacks)) = self.providers.split_last() else {
            return Err(QuoteError::NoProviders);
        };

        for provider in fallbacks {
            match attempt(provider.as_ref(), pair) {
                Ok(quote) => return Ok(quote),
                Err(e) => warn!("{} skipped for {}: {}", provider.source(), pair, e),
            }
        }
        attempt(last.as_ref(), pair)
    }
}

fn attempt(provider: &dyn QuoteProvider, pair: &str) -> Result<Quote> {
    provider.check_available()?;
    debug!("Querying {} for {}", provider.source(), pair);
    provider.fetch_latest(pair)
}
