//! Shared helper functions for macro dialect implementations.

use chrono::{DateTime, SecondsFormat, Utc};

// =============================================================================
// String Quoting
// =============================================================================

/// Quote string with single quotes (standard SQL).
pub fn quote_string_single(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// Strip one layer of single quotes from each end, if present.
///
/// `'1h'` → `1h`, `'1h` → `1h`, `1h` → `1h`.
pub fn strip_single_quotes(s: &str) -> &str {
    let s = s.strip_prefix('\'').unwrap_or(s);
    s.strip_suffix('\'').unwrap_or(s)
}

// =============================================================================
// Instants
// =============================================================================

/// Format an instant as RFC 3339 with whole seconds and a `Z` suffix.
///
/// `2024-01-01T00:00:00Z`
pub fn format_rfc3339_utc(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}
