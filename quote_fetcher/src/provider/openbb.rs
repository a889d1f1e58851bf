//! OpenBB alternate-shape adapter.
//!
//! Queries `GET /api/v1/forex/price/latest`. Depending on the server version
//! the body is either an OBBject envelope with a `results` array, a bare
//! column-oriented table (`{"date": [...], "close": [...]}`) or a single row.
use log::debug;
use quote_common::series::{PriceRow, date_cell, latest_close};
use quote_common::{Quote, QuoteError, Result, Source};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;

use super::{QuoteProvider, endpoint, send_json};

const SOURCE: Source = Source::Openbb;
const PATH: [&str; 5] = ["api", "v1", "forex", "price", "latest"];

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LatestPriceResponse {
    Envelope {
        results: Vec<PriceRow>,
    },
    Columns {
        #[serde(default)]
        date: Vec<Value>,
        close: Vec<Option<f64>>,
    },
    Row(PriceRow),
}

impl LatestPriceResponse {
    fn into_rows(self) -> Vec<PriceRow> {
        match self {
            LatestPriceResponse::Envelope { results } => results,
            LatestPriceResponse::Columns { date, close } => {
                let mut dates = date.into_iter();
                close
                    .into_iter()
                    .map(|close| PriceRow::new(dates.next().and_then(date_cell), close))
                    .collect()
            }
            LatestPriceResponse::Row(row) => vec![row],
        }
    }
}

/// Adapter for the OpenBB latest-price endpoint.
pub struct OpenbbProvider {
    client: Client,
    base_url: String,
}

impl OpenbbProvider {
    /// Create an adapter talking to the OpenBB API at `base_url`.
    pub fn new(client: Client, base_url: &str) -> Self {
        OpenbbProvider {
            client,
            base_url: base_url.trim().to_string(),
        }
    }
}

impl QuoteProvider for OpenbbProvider {
    fn source(&self) -> Source {
        SOURCE
    }

    fn check_available(&self) -> Result<()> {
        if !cfg!(feature = "openbb") {
            return Err(QuoteError::ProviderUnavailable {
                provider: SOURCE,
                reason: "built without the `openbb` feature".to_string(),
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

        let request = self.client.get(url).query(&[("symbol", pair)]);
        let response: LatestPriceResponse = send_json(SOURCE, request)?;
        quote_from_rows(pair, response.into_rows())
    }
}

fn quote_from_rows(pair: &str, rows: Vec<PriceRow>) -> Result<Quote> {
    if rows.is_empty() {
        return Err(QuoteError::malformed(SOURCE, "empty result set"));
    }
    let (last, ts) = latest_close(&rows)
        .ok_or_else(|| QuoteError::malformed(SOURCE, "no close price in response"))?;
    Ok(Quote::new(SOURCE, pair, last, ts))
}
