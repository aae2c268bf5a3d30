//! SQL dialect definitions for macro expansion.
//!
//! Macro output is plain SQL text, but the functions it calls differ
//! between databases:
//!
//! - Timestamp parsing: `TO_TIMESTAMP('...', 'fmt')` (Oracle)
//! - Calendar truncation: `trunc(col, 'MM')` (Oracle)
//! - Fixed-width bucketing over `DATE` arithmetic
//!
//! Each dialect implements [`MacroDialect`]; the [`MacroEngine`] is generic
//! over it.
//!
//! [`MacroEngine`]: crate::macros::MacroEngine

pub mod helpers;
mod oracle;

pub use oracle::Oracle;

use chrono::{DateTime, Utc};

/// Macro dialect trait - defines how time macros are rendered.
///
/// The default implementations cover the parts that are the same for
/// every dialect (`AS "time"` aliases and quoted instant literals).
pub trait MacroDialect: std::fmt::Debug + Send + Sync {
    /// Dialect name for display/logging.
    fn name(&self) -> &'static str;

    // =========================================================================
    // Literals
    // =========================================================================

    /// Quote a string literal.
    fn quote_string(&self, s: &str) -> String {
        helpers::quote_string_single(s)
    }

    /// Format an instant as a quoted ISO-8601 string literal.
    fn instant_literal(&self, instant: &DateTime<Utc>) -> String {
        self.quote_string(&helpers::format_rfc3339_utc(instant))
    }

    /// Format an instant as a timestamp expression.
    fn timestamp_expr(&self, instant: &DateTime<Utc>) -> String;

    // =========================================================================
    // Time Columns
    // =========================================================================

    /// Alias an expression as the `time` column.
    fn alias_time(&self, expr: &str) -> String {
        format!("{} AS \"time\"", expr)
    }

    /// Restrict a column to `[from, to]`.
    fn time_filter(&self, column: &str, from: &DateTime<Utc>, to: &DateTime<Utc>) -> String {
        format!(
            "{} BETWEEN {} AND {}",
            column,
            self.timestamp_expr(from),
            self.timestamp_expr(to)
        )
    }

    // =========================================================================
    // Bucketing
    // =========================================================================

    /// Map a calendar truncation token to the dialect keyword.
    ///
    /// Returns `None` if the token is not a calendar unit. Matching is exact.
    fn calendar_unit(&self, token: &str) -> Option<&'static str>;

    /// Truncate a column to a calendar unit returned by [`calendar_unit`].
    ///
    /// [`calendar_unit`]: MacroDialect::calendar_unit
    fn truncate_to_unit(&self, column: &str, unit: &str) -> String;

    /// Floor a column to fixed-width buckets, `buckets_per_day` per day.
    fn bucket_floor(&self, column: &str, buckets_per_day: f64) -> String;
}
