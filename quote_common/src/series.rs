//! Row-oriented price series and the latest-close lookup shared by all adapters.
//!
//! Providers return tables in different shapes; each adapter converts its
//! payload into `PriceRow`s in provider order and hands them to
//! [`latest_close`], which picks the last usable price and its timestamp.

use serde::Deserialize;

/// One row of a provider price table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PriceRow {
    /// Row timestamp as rendered by the provider.
    #[serde(default, deserialize_with = "deserialize_date")]
    pub date: Option<String>,
    /// Close price; `None` when the provider left the cell empty.
    #[serde(default)]
    pub close: Option<f64>,
}

impl PriceRow {
    /// Create a row from its date and close cells.
    pub fn new(date: Option<String>, close: Option<f64>) -> Self {
        PriceRow { date, close }
    }
}

/// Returns the last finite close in `rows` together with that row's date.
///
/// A missing date on the selected row yields an empty timestamp string.
/// Returns `None` when no row carries a usable close.
pub fn latest_close(rows: &[PriceRow]) -> Option<(f64, String)> {
    rows.iter().rev().find_map(|row| match row.close {
        Some(close) if close.is_finite() => Some((close, row.date.clone().unwrap_or_default())),
        _ => None,
    })
}

/// Render a JSON date cell as text.
///
/// Strings are taken as-is, numbers (epoch values some providers emit) keep
/// their JSON spelling, and `null` means the cell is missing.
pub fn date_cell(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(date_cell))
}
