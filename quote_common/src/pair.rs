//! Currency pair defaults and input normalization.

use crate::error::QuoteError;

/// Pair used when neither `--pair` nor `PAIR` is set.
pub const DEFAULT_PAIR: &str = "EURUSD";

/// Normalize a pair given on the command line or in the environment.
///
/// Trims whitespace and one layer of matching quotes so values like
/// `PAIR="\"GBPUSD\""` behave. The symbol itself is not rewritten: provider
/// specific conventions stay inside the adapters.
pub fn normalize_pair(raw: &str) -> Result<String, QuoteError> {
    let trimmed = raw.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| trimmed.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')))
        .unwrap_or(trimmed)
        .trim();

    if unquoted.is_empty() {
        return Err(QuoteError::InvalidPair(raw.to_string()));
    }
    Ok(unquoted.to_string())
}
