//! Error types shared between the fetcher and its provider adapters.
//!
//! The `QuoteError` enum covers the three ways a provider attempt can go wrong
//! (unavailable, query failed, malformed data) together with the few failures
//! owned by the entry point, so every layer can propagate a single error type.
use std::io;

use thiserror::Error;

use crate::source::Source;

/// Unified error type for quote retrieval.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// The provider adapter is not usable in this build or environment.
    #[error("Provider {provider} unavailable: {reason}")]
    ProviderUnavailable {
        /// Provider that was skipped.
        provider: Source,
        /// Why the provider could not be used.
        reason: String,
    },

    /// Network, HTTP status or API-level error reported while querying a provider.
    #[error("Provider {provider} query failed: {message}")]
    ProviderQueryFailed {
        /// Provider that was queried.
        provider: Source,
        /// Error message from the transport or the API.
        message: String,
    },

    /// The provider answered, but the body had no usable close price.
    #[error("Provider {provider} returned malformed data: {message}")]
    ProviderDataMalformed {
        /// Provider whose payload was rejected.
        provider: Source,
        /// Description of what was missing or unparseable.
        message: String,
    },

    /// The fetcher was built without any provider adapters.
    #[error("No quote providers configured")]
    NoProviders,

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// The currency pair is empty after normalization.
    #[error("Invalid currency pair: {0:?}")]
    InvalidPair(String),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// I/O error while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl QuoteError {
    /// Builds a `ProviderQueryFailed` from any displayable error.
    pub fn query_failed(provider: Source, err: impl std::fmt::Display) -> Self {
        QuoteError::ProviderQueryFailed {
            provider,
            message: err.to_string(),
        }
    }

    /// Builds a `ProviderDataMalformed` from any displayable error.
    pub fn malformed(provider: Source, err: impl std::fmt::Display) -> Self {
        QuoteError::ProviderDataMalformed {
            provider,
            message: err.to_string(),
        }
    }

    /// Provider the error is attributed to, if any.
    pub fn provider(&self) -> Option<Source> {
        match self {
            QuoteError::ProviderUnavailable { provider, .. }
            | QuoteError::ProviderQueryFailed { provider, .. }
            | QuoteError::ProviderDataMalformed { provider, .. } => Some(*provider),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_errors_name_their_source() {
        let err = QuoteError::query_failed(Source::Yfinance, "HTTP status 503");
        assert_eq!(err.provider(), Some(Source::Yfinance));
        assert_eq!(
            err.to_string(),
            "Provider yfinance query failed: HTTP status 503"
        );
    }

    #[test]
    fn non_provider_errors_have_no_source() {
        assert_eq!(QuoteError::NoProviders.provider(), None);
        assert_eq!(QuoteError::InvalidPair(String::new()).provider(), None);
    }
}
