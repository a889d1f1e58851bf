//! Quote Fetcher — prints the latest quote for a currency pair as JSON.
//!
//! The pair comes from `--pair` or the `PAIR` environment variable (default
//! `EURUSD`). Three providers are tried in order and the first answer wins:
//!
//! - `openbb-core` — OpenBB Platform REST API (cargo feature `openbb-core`).
//! - `openbb` — OpenBB alternate endpoint (cargo feature `openbb`).
//! - `yfinance` — Yahoo Finance chart API, always compiled in.
//!
//! Usage example (CLI):
//! ```bash
//! PAIR=GBPUSD quote_fetcher --openbb-url http://127.0.0.1:6900
//! ```
//!
//! The quote is printed to stdout; logs go to stderr (`RUST_LOG` controls the
//! level). When every provider fails the last error is returned from `main`,
//! so the process exits with a non-zero status.
#![warn(missing_docs)]
mod args;
mod fetcher;
mod provider;
#[cfg(test)]
mod test_support;

use crate::args::Args;
use crate::fetcher::QuoteFetcher;
use clap::Parser;
use log::{error, info};
use quote_common::pair::normalize_pair;
use quote_common::{QuoteError, Result};

fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();
    let pair = normalize_pair(&args.pair)?;

    let client = provider::http_client()?;
    let fetcher = QuoteFetcher::new(provider::standard_chain(&client, &args.provider_config()));

    match fetcher.fetch(&pair) {
        Ok(quote) => {
            info!(
                "Source={} Pair={} Last={} @ {}",
                quote.source, quote.pair, quote.last, quote.ts
            );
            println!("{}", quote.to_pretty_json()?);
            Ok(())
        }
        Err(e) => {
            error!("Failed to fetch quote for {}: {}", pair, e);
            Err(e)
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
