//! Interval strings such as `30m`, `1h30m`, `1.5h` or `2d`.
//!
//! Grammar: an optional sign followed by one or more `<decimal><unit>`
//! groups. A bare `0` needs no unit.
//!
//! | unit | length |
//! |------|--------|
//! | `ns` | nanosecond |
//! | `us`, `µs`, `μs` | microsecond |
//! | `ms` | millisecond |
//! | `s` | second |
//! | `m` | minute |
//! | `h` | hour |
//! | `d` | 24 hours |
//! | `w` | 7 days |

use chrono::TimeDelta;
use thiserror::Error;

const NANOS_PER_SECOND: u128 = 1_000_000_000;

/// Errors produced while parsing an interval.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntervalError {
    #[error("empty interval")]
    Empty,

    #[error("invalid interval {0:?}")]
    Invalid(String),

    #[error("missing unit in interval {0:?}")]
    MissingUnit(String),

    #[error("unknown unit {unit:?} in interval {input:?}")]
    UnknownUnit { unit: String, input: String },

    #[error("interval {0:?} is out of range")]
    Overflow(String),
}

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(NANOS_PER_SECOND),
        "m" => Some(60 * NANOS_PER_SECOND),
        "h" => Some(3_600 * NANOS_PER_SECOND),
        "d" => Some(86_400 * NANOS_PER_SECOND),
        "w" => Some(7 * 86_400 * NANOS_PER_SECOND),
        _ => None,
    }
}

/// Parse an interval string into a signed duration.
pub fn parse_interval(input: &str) -> Result<TimeDelta, IntervalError> {
    if input.is_empty() {
        return Err(IntervalError::Empty);
    }

    let (negative, mut rest) = match input.as_bytes()[0] {
        b'-' => (true, &input[1..]),
        b'+' => (false, &input[1..]),
        _ => (false, input),
    };

    if rest == "0" {
        return Ok(TimeDelta::zero());
    }
    if rest.is_empty() {
        return Err(IntervalError::Invalid(input.to_string()));
    }

    let overflow = || IntervalError::Overflow(input.to_string());
    let mut total: u128 = 0;

    while !rest.is_empty() {
        // Whole part
        let int_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        let (int_digits, after_int) = rest.split_at(int_len);

        // Fractional part
        let (frac_digits, after_frac) = match after_int.strip_prefix('.') {
            Some(tail) => {
                let frac_len = tail.bytes().take_while(u8::is_ascii_digit).count();
                tail.split_at(frac_len)
            }
            None => ("", after_int),
        };

        if int_digits.is_empty() && frac_digits.is_empty() {
            return Err(IntervalError::Invalid(input.to_string()));
        }

        // Unit runs until the next digit or '.'
        let unit_len = after_frac
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(after_frac.len());
        let (unit, tail) = after_frac.split_at(unit_len);
        if unit.is_empty() {
            return Err(IntervalError::MissingUnit(input.to_string()));
        }
        let scale = unit_nanos(unit).ok_or_else(|| IntervalError::UnknownUnit {
            unit: unit.to_string(),
            input: input.to_string(),
        })?;

        let whole: u128 = if int_digits.is_empty() {
            0
        } else {
            int_digits.parse().map_err(|_| overflow())?
        };
        let mut value = whole.checked_mul(scale).ok_or_else(overflow)?;

        // Digits past nanosecond precision do not contribute.
        let frac_digits = &frac_digits[..frac_digits.len().min(18)];
        if !frac_digits.is_empty() {
            let numerator: u128 = frac_digits.parse().map_err(|_| overflow())?;
            let denominator = 10u128.pow(frac_digits.len() as u32);
            value = value
                .checked_add(numerator * scale / denominator)
                .ok_or_else(overflow)?;
        }

        total = total.checked_add(value).ok_or_else(overflow)?;
        rest = tail;
    }

    let nanos = i64::try_from(total).map_err(|_| overflow())?;
    let nanos = if negative { -nanos } else { nanos };
    Ok(TimeDelta::nanoseconds(nanos))
}

/// Interval length in seconds, with sub-second precision.
pub fn interval_seconds(interval: &TimeDelta) -> f64 {
    match interval.num_nanoseconds() {
        Some(nanos) => nanos as f64 / NANOS_PER_SECOND as f64,
        None => interval.num_milliseconds() as f64 / 1_000.0,
    }
}
