//! Identifiers of the data providers a quote can come from.

use strum_macros::{Display, EnumString};

/// Provider that answered a quote request.
///
/// The string form is what ends up in `Quote::source`, so callers can tell
/// which backend served the price.
#[derive(
    Debug,
    Clone,
    Copy,
    Display,
    EnumString,
    Hash,
    Eq,
    PartialEq,
)]
#[strum(ascii_case_insensitive)]
pub enum Source {
    /// OpenBB Platform REST API, row-oriented results.
    #[strum(serialize = "openbb-core")]
    OpenbbCore,
    /// OpenBB alternate endpoint, row- or column-oriented results.
    #[strum(serialize = "openbb")]
    Openbb,
    /// Yahoo Finance chart API.
    #[strum(serialize = "yfinance")]
    Yfinance,
}
