//! Query time ranges.
//!
//! Dashboards send range bounds as strings:
//!
//! - `"1704067200000"` - epoch milliseconds
//! - `"now"` - the request time
//! - `"now-6h"` - relative to the request time (interval grammar of
//!   [`parse_interval`])

use chrono::{DateTime, TimeDelta, Utc};
use thiserror::Error;

use crate::macros::interval::{parse_interval, IntervalError};

/// Errors produced while parsing a time range bound.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeRangeError {
    #[error("invalid time range bound {bound:?}: {source}")]
    InvalidBound {
        bound: String,
        #[source]
        source: IntervalError,
    },

    #[error("epoch {0} ms is out of range")]
    EpochOutOfRange(i64),
}

/// Immutable `[from, to]` pair of UTC instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    from: DateTime<Utc>,
    to: DateTime<Utc>,
}

impl TimeRange {
    /// Create a time range from two instants.
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self { from, to }
    }

    /// Create a time range from epoch milliseconds.
    pub fn from_epoch_millis(from_ms: i64, to_ms: i64) -> Result<Self, TimeRangeError> {
        Ok(Self::new(epoch_millis(from_ms)?, epoch_millis(to_ms)?))
    }

    /// Parse dashboard-style bounds, resolving `now` against `now`.
    pub fn parse(from: &str, to: &str, now: DateTime<Utc>) -> Result<Self, TimeRangeError> {
        Ok(Self::new(parse_bound(from, now)?, parse_bound(to, now)?))
    }

    /// Start of the range.
    pub fn from_utc(&self) -> DateTime<Utc> {
        self.from
    }

    /// End of the range.
    pub fn to_utc(&self) -> DateTime<Utc> {
        self.to
    }

    /// Length of the range.
    pub fn duration(&self) -> TimeDelta {
        self.to - self.from
    }
}

fn epoch_millis(ms: i64) -> Result<DateTime<Utc>, TimeRangeError> {
    DateTime::from_timestamp_millis(ms).ok_or(TimeRangeError::EpochOutOfRange(ms))
}

fn parse_bound(bound: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>, TimeRangeError> {
    let bound = bound.trim();

    if let Ok(ms) = bound.parse::<i64>() {
        return epoch_millis(ms);
    }
    if bound == "now" {
        return Ok(now);
    }

    let invalid = |source| TimeRangeError::InvalidBound {
        bound: bound.to_string(),
        source,
    };

    // "now-6h" and "now+1h" are both offsets from now; anything else is
    // read as an offset into the past ("6h" == "now-6h").
    let offset = match bound.strip_prefix("now") {
        Some(rest) if rest.starts_with(['-', '+']) => parse_interval(rest).map_err(invalid)?,
        Some(_) => return Err(invalid(IntervalError::Invalid(bound.to_string()))),
        None => -parse_interval(bound).map_err(invalid)?,
    };

    now.checked_add_signed(offset)
        .ok_or_else(|| invalid(IntervalError::Overflow(bound.to_string())))
}
