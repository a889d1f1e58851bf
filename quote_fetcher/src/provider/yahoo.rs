//! Yahoo Finance chart adapter.
//!
//! Queries `GET /v8/finance/chart/{symbol}?range=1d&interval=1m`. Yahoo lists
//! FX pairs with an `=X` suffix (`EURUSD=X`), so the symbol is rewritten here
//! and only here; the returned quote keeps the caller's pair.
use chrono::DateTime;
use log::debug;
use quote_common::series::{PriceRow, latest_close};
use quote_common::{Quote, QuoteError, Result, Source};
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use serde::Deserialize;

use super::{QuoteProvider, endpoint, send_json};

const SOURCE: Source = Source::Yfinance;
const FX_SUFFIX: &str = "=X";
const RANGE: &str = "1d";
const INTERVAL: &str = "1m";
/// Yahoo rejects requests without a browser-like agent.
const BROWSER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
    #[serde(default)]
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<QuoteIndicator>,
}

#[derive(Debug, Deserialize)]
struct QuoteIndicator {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

/// Adapter for the Yahoo Finance chart API.
pub struct YahooProvider {
    client: Client,
    base_url: String,
}

impl YahooProvider {
    /// Create an adapter talking to the Yahoo API at `base_url`.
    pub fn new(client: Client, base_url: &str) -> Self {
        YahooProvider {
            client,
            base_url: base_url.trim().to_string(),
        }
    }
}

/// Yahoo ticker for a currency pair: `EURUSD` becomes `EURUSD=X`.
pub fn yahoo_symbol(pair: &str) -> String {
    if pair.ends_with(FX_SUFFIX) {
        pair.to_string()
    } else {
        format!("{pair}{FX_SUFFIX}")
    }
}

/// Render unix seconds the way the quote reports minute bars, in UTC.
fn format_timestamp(secs: i64) -> Option<String> {
    DateTime::from_timestamp(secs, 0).map(|dt| dt.format("%Y-%m-%d %H:%M:%S%:z").to_string())
}

impl QuoteProvider for YahooProvider {
    fn source(&self) -> Source {
        SOURCE
    }

    fn fetch_latest(&self, pair: &str) -> Result<Quote> {
        let symbol = yahoo_symbol(pair);
        let url = endpoint(SOURCE, &self.base_url, &["v8", "finance", "chart", symbol.as_str()])?;
        debug!("Requesting {} for {}", url, pair);

        let request = self
            .client
            .get(url)
            .header(USER_AGENT, BROWSER_AGENT)
            .query(&[("range", RANGE), ("interval", INTERVAL)]);
        let response: ChartResponse = send_json(SOURCE, request)?;
        quote_from_chart(pair, response.chart)
    }
}

fn quote_from_chart(pair: &str, chart: Chart) -> Result<Quote> {
    if let Some(error) = chart.error {
        return Err(QuoteError::query_failed(
            SOURCE,
            format!(
                "{}: {}",
                error.code.unwrap_or_else(|| "Error".to_string()),
                error.description.unwrap_or_default()
            ),
        ));
    }

    let result = chart
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| QuoteError::malformed(SOURCE, "empty chart result"))?;
    let closes = result
        .indicators
        .quote
        .into_iter()
        .next()
        .map(|q| q.close)
        .ok_or_else(|| QuoteError::malformed(SOURCE, "chart has no quote indicators"))?;

    let rows: Vec<PriceRow> = result
        .timestamp
        .iter()
        .zip(closes)
        .map(|(&secs, close)| PriceRow::new(format_timestamp(secs), close))
        .collect();
    if rows.is_empty() {
        return Err(QuoteError::malformed(SOURCE, "chart has no price bars"));
    }

    let (last, ts) = latest_close(&rows)
        .ok_or_else(|| QuoteError::malformed(SOURCE, "no close price in chart"))?;
    Ok(Quote::new(SOURCE, pair, last, ts))
}
