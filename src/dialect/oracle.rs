//! Oracle dialect.

use chrono::{DateTime, Utc};

use super::{helpers, MacroDialect};

/// `TO_TIMESTAMP` format matching [`helpers::format_rfc3339_utc`].
pub const TIMESTAMP_FORMAT: &str = r#"YYYY-MM-DD"T"HH24:MI:SS"Z""#;

/// Oracle dialect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Oracle;

impl MacroDialect for Oracle {
    fn name(&self) -> &'static str {
        "oracle"
    }

    fn timestamp_expr(&self, instant: &DateTime<Utc>) -> String {
        format!(
            "TO_TIMESTAMP({}, {})",
            self.instant_literal(instant),
            self.quote_string(TIMESTAMP_FORMAT)
        )
    }

    fn calendar_unit(&self, token: &str) -> Option<&'static str> {
        // Keys are `TRUNC(date)` format models, plus `1D`/`1W` shorthands.
        match token {
            "CC" => Some("CC"),
            "DAY" => Some("DAY"),
            "1D" | "D" => Some("D"),
            "DD" => Some("DD"),
            "DDD" => Some("DDD"),
            "DY" => Some("DY"),
            "HH" => Some("HH"),
            "HH12" => Some("HH12"),
            "HH24" => Some("HH24"),
            "1W" | "IW" => Some("IW"),
            "IYYY" => Some("IYYY"),
            "IYY" => Some("IYY"),
            "IY" => Some("IY"),
            "I" => Some("I"),
            "J" => Some("J"),
            "MI" => Some("MI"),
            "MM" => Some("MM"),
            "MON" => Some("MON"),
            "MONTH" => Some("MONTH"),
            "Q" => Some("Q"),
            "RM" => Some("RM"),
            "RR" => Some("RR"),
            "RRRR" => Some("RRRR"),
            "W" => Some("W"),
            "WW" => Some("WW"),
            "Y,YYY" => Some("Y,YYY"),
            "YYYY" => Some("YYYY"),
            "SYYYY" => Some("SYYYY"),
            "YYY" => Some("YYY"),
            "YY" => Some("YY"),
            "Y" => Some("Y"),
            _ => None,
        }
    }

    fn truncate_to_unit(&self, column: &str, unit: &str) -> String {
        format!("trunc({}, {})", column, self.quote_string(unit))
    }

    fn bucket_floor(&self, column: &str, buckets_per_day: f64) -> String {
        // Fraction of the day since midnight, floored to whole buckets.
        format!(
            "trunc( (CAST({c} as DATE) - trunc({c})) * {b} )/ {b} + trunc( {c} )",
            c = column,
            b = buckets_per_day
        )
    }
}
