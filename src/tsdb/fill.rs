//! Fill mode registration for `$__timeGroup(col, interval, fill)`.

use chrono::TimeDelta;
use thiserror::Error;

use super::query::QueryContext;

/// Errors produced while registering a fill mode.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FillModeError {
    #[error("error parsing fill value {0}")]
    InvalidValue(String),
}

/// How to fill buckets that have no rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FillMode {
    /// Emit NULL.
    Null,
    /// Repeat the previous bucket's value.
    Previous,
    /// Emit a constant.
    Value(f64),
}

impl FillMode {
    /// Parse the fill argument: `NULL`, `previous` or a number.
    pub fn parse(raw: &str) -> Result<Self, FillModeError> {
        match raw {
            "NULL" => Ok(FillMode::Null),
            "previous" => Ok(FillMode::Previous),
            other => other
                .parse::<f64>()
                .map(FillMode::Value)
                .map_err(|_| FillModeError::InvalidValue(other.to_string())),
        }
    }

    /// Model name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            FillMode::Null => "null",
            FillMode::Previous => "previous",
            FillMode::Value(_) => "value",
        }
    }
}

/// Fill mode plus the bucket width it applies to.
#[derive(Debug, Clone, PartialEq)]
pub struct FillSettings {
    pub interval: TimeDelta,
    pub mode: FillMode,
}

/// Parse `raw` and record it on `query` for buckets of `interval`.
pub fn setup_fill_mode(
    query: &mut dyn QueryContext,
    interval: TimeDelta,
    raw: &str,
) -> Result<(), FillModeError> {
    let mode = FillMode::parse(raw)?;
    query.set_fill_mode(FillSettings { interval, mode });
    Ok(())
}
