//! Provider adapters and the HTTP plumbing they share.
//!
//! Every adapter implements [`QuoteProvider`]: it queries one external service
//! for the latest price of a pair and normalizes the answer into a `Quote`.
//! The adapters are independent; symbol conventions of one service never leak
//! into another.
//!
//! - `openbb_core` — OpenBB Platform REST API, row-oriented results.
//! - `openbb` — OpenBB alternate endpoint, row- or column-oriented results.
//! - `yahoo` — Yahoo Finance chart API, `=X` symbol suffix.
pub mod openbb;
pub mod openbb_core;
pub mod yahoo;

use log::debug;
use quote_common::{Quote, QuoteError, Result, Source};
use reqwest::Url;
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

pub use openbb::OpenbbProvider;
pub use openbb_core::OpenbbCoreProvider;
pub use yahoo::YahooProvider;

/// Default base URL of a locally running OpenBB Platform API.
pub const DEFAULT_OPENBB_URL: &str = "http://127.0.0.1:6900";
/// Default base URL of the Yahoo Finance query API.
pub const DEFAULT_YAHOO_URL: &str = "https://query1.finance.yahoo.com";

/// Longest slice of an error body quoted back in error messages.
const BODY_SNIPPET_LEN: usize = 200;

/// A data provider that can answer "latest price for this pair".
pub trait QuoteProvider {
    /// Identifier stamped on quotes and errors from this provider.
    fn source(&self) -> Source;

    /// Capability probe run before every query.
    ///
    /// Returns `ProviderUnavailable` when the adapter cannot be used in this
    /// build or environment.
    fn check_available(&self) -> Result<()> {
        Ok(())
    }

    /// Query the provider and normalize its latest close into a `Quote`.
    fn fetch_latest(&self, pair: &str) -> Result<Quote>;
}

/// Base URLs of the external services.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// OpenBB Platform API root; an empty value disables both OpenBB adapters.
    pub openbb_url: String,
    /// Yahoo Finance API root.
    pub yahoo_url: String,
}

/// Build the blocking HTTP client shared by all adapters.
pub fn http_client() -> Result<Client> {
    Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| QuoteError::HttpClient(e.to_string()))
}

/// The fixed fallback chain: OpenBB core, OpenBB alternate, Yahoo Finance.
pub fn standard_chain(client: &Client, config: &ProviderConfig) -> Vec<Box<dyn QuoteProvider>> {
    let primary: Box<dyn QuoteProvider> =
        Box::new(OpenbbCoreProvider::new(client.clone(), &config.openbb_url));
    let secondary: Box<dyn QuoteProvider> =
        Box::new(OpenbbProvider::new(client.clone(), &config.openbb_url));
    let fallback: Box<dyn QuoteProvider> =
        Box::new(YahooProvider::new(client.clone(), &config.yahoo_url));
    vec![primary, secondary, fallback]
}

/// Join `segments` onto `base`, percent-encoding each one.
pub(crate) fn endpoint(source: Source, base: &str, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(base).map_err(|e| QuoteError::ProviderUnavailable {
        provider: source,
        reason: format!("invalid base URL {base:?}: {e}"),
    })?;
    url.path_segments_mut()
        .map_err(|_| QuoteError::ProviderUnavailable {
            provider: source,
            reason: format!("base URL {base:?} cannot carry a path"),
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Send `request` and decode a successful JSON body into `T`.
///
/// Transport errors and non-2xx statuses are query failures; a body that does
/// not match `T` is malformed data.
pub(crate) fn send_json<T: DeserializeOwned>(source: Source, request: RequestBuilder) -> Result<T> {
    let response = request
        .send()
        .map_err(|e| QuoteError::query_failed(source, e))?;
    let status = response.status();
    debug!("{} answered {} from {}", source, status, response.url());

    let body = response
        .text()
        .map_err(|e| QuoteError::query_failed(source, e))?;
    if !status.is_success() {
        return Err(QuoteError::query_failed(
            source,
            format!("HTTP status {}: {}", status, snippet(&body)),
        ));
    }

    serde_json::from_str(&body).map_err(|e| QuoteError::malformed(source, e))
}

fn snippet(body: &str) -> &str {
    match body.char_indices().nth(BODY_SNIPPET_LEN) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{OneShotServer, test_client};
    use serde_json::Value;

    #[test]
    fn endpoint_appends_encoded_segments() {
        let url = endpoint(Source::Yfinance, "https://example.com/", &["v8", "chart", "EUR USD=X"])
            .unwrap();
        assert_eq!(url.as_str(), "https://example.com/v8/chart/EUR%20USD=X");
    }

    #[test]
    fn endpoint_rejects_unusable_base() {
        let err = endpoint(Source::Openbb, "not a url", &["api"]).unwrap_err();
        assert!(matches!(
            err,
            QuoteError::ProviderUnavailable { provider: Source::Openbb, .. }
        ));
    }

    #[test]
    fn send_json_maps_http_errors_to_query_failed() {
        let server = OneShotServer::respond(503, r#"{"detail":"maintenance"}"#);
        let client = test_client();
        let err = send_json::<Value>(Source::OpenbbCore, client.get(&server.base_url)).unwrap_err();

        match err {
            QuoteError::ProviderQueryFailed { provider, message } => {
                assert_eq!(provider, Source::OpenbbCore);
                assert!(message.contains("503"), "{message}");
                assert!(message.contains("maintenance"), "{message}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        server.request_line();
    }

    #[test]
    fn send_json_maps_bad_body_to_malformed() {
        let server = OneShotServer::respond(200, "<html>not json</html>");
        let client = test_client();
        let err = send_json::<Value>(Source::Openbb, client.get(&server.base_url)).unwrap_err();

        assert!(matches!(
            err,
            QuoteError::ProviderDataMalformed { provider: Source::Openbb, .. }
        ));
        server.request_line();
    }

    #[test]
    fn send_json_maps_connection_errors_to_query_failed() {
        let client = test_client();
        let url = crate::test_support::unreachable_base_url();
        let err = send_json::<Value>(Source::Yfinance, client.get(&url)).unwrap_err();

        assert!(matches!(
            err,
            QuoteError::ProviderQueryFailed { provider: Source::Yfinance, .. }
        ));
    }

    #[test]
    fn snippet_truncates_long_bodies_on_char_boundary() {
        let body = "é".repeat(BODY_SNIPPET_LEN + 10);
        assert_eq!(snippet(&body).chars().count(), BODY_SNIPPET_LEN);
        assert_eq!(snippet("short"), "short");
    }
}
