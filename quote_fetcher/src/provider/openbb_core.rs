//! OpenBB Platform REST adapter.
//!
//! Queries `GET /api/v1/currency/price/historical` on an OpenBB Platform API
//! server and reads the row-oriented `results` array of the OBBject envelope.
use log::debug;
use quote_common::series::{PriceRow, latest_close};
use quote_common::{Quote, QuoteError, Result, Source};
use reqwest::blocking::Client;
use serde::Deserialize;

use super::{QuoteProvider, endpoint, send_json};

const SOURCE: Source = Source::OpenbbCore;
const PATH: [&str; 5] = ["api", "v1", "currency", "price", "historical"];
const INTERVAL: &str = "1m";

/// OBBject envelope; only the result rows matter here.
#[derive(Debug, Deserialize)]
pub(crate) struct ObbjectResponse {
    #[serde(default)]
    pub(crate) results: Option<Vec<PriceRow>>,
}

/// Adapter for the OpenBB Platform historical price endpoint.
pub struct OpenbbCoreProvider {
    client: Client,
    base_url: String,
}

impl OpenbbCoreProvider {
    /// Create an adapter talking to the OpenBB API at `base_url`.
    pub fn new(client: Client, base_url: &str) -> Self {
        OpenbbCoreProvider {
            client,
            base_url: base_url.trim().to_string(),
        }
    }
}

impl QuoteProvider for OpenbbCoreProvider {
    fn source(&self) -> Source {
        SOURCE
    }

    fn check_available(&self) -> Result<()> {
        if !cfg!(feature = "openbb-core") {
            return Err(QuoteError::ProviderUnavailable {
                provider: SOURCE,
                reason: "built without the `openbb-core` feature".to_string(),
            });
        }
        if self.base_url.is_empty() {
            return Err(QuoteError::ProviderUnavailable {
                provider: SOURCE,
                reason: "no OpenBB API URL configured".to_string(),
            });
        }
        Ok(())
    }

    fn fetch_latest(&self, pair: &str) -> Result<Quote> {
        let url = endpoint(SOURCE, &self.base_url, &PATH)?;
        debug!("Requesting {} for {}", url, pair);

        let request = self
            .client
            .get(url)
            .query(&[("symbol", pair), ("interval", INTERVAL)]);
        let response: ObbjectResponse = send_json(SOURCE, request)?;
        quote_from_results(pair, response.results)
    }
}

fn quote_from_results(pair: &str, results: Option<Vec<PriceRow>>) -> Result<Quote> {
    let rows = results.ok_or_else(|| QuoteError::malformed(SOURCE, "response has no `results`"))?;
    if rows.is_empty() {
        return Err(QuoteError::malformed(SOURCE, "empty result set"));
    }
    let (last, ts) = latest_close(&rows)
        .ok_or_else(|| QuoteError::malformed(SOURCE, "no close price in results"))?;
    Ok(Quote::new(SOURCE, pair, last, ts))
}
