//! Command-line arguments for the quote fetcher.
//!
//! Every flag falls back to an environment variable, so the binary runs with
//! no arguments at all: `PAIR=GBPUSD quote_fetcher`.
use clap::Parser;
use quote_common::pair::DEFAULT_PAIR;

use crate::provider::{DEFAULT_OPENBB_URL, DEFAULT_YAHOO_URL, ProviderConfig};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Currency pair to quote (e.g., EURUSD).
    #[clap(long, env = "PAIR", default_value = DEFAULT_PAIR)]
    pub pair: String,

    /// Root URL of the OpenBB Platform API. Empty disables both OpenBB providers.
    #[clap(long, env = "OPENBB_API_URL", default_value = DEFAULT_OPENBB_URL)]
    pub openbb_url: String,

    /// Root URL of the Yahoo Finance API.
    #[clap(long, env = "YAHOO_FINANCE_URL", default_value = DEFAULT_YAHOO_URL)]
    pub yahoo_url: String,
}

impl Args {
    /// Provider endpoints selected by these arguments.
    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            openbb_url: self.openbb_url.clone(),
            yahoo_url: self.yahoo_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "quote_fetcher",
            "--pair",
            "USDJPY",
            "--openbb-url",
            "",
            "--yahoo-url",
            "http://127.0.0.1:9",
        ])
        .unwrap();

        assert_eq!(args.pair, "USDJPY");
        let config = args.provider_config();
        assert_eq!(config.openbb_url, "");
        assert_eq!(config.yahoo_url, "http://127.0.0.1:9");
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
