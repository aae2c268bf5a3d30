//! Per-macro evaluation rules.

use chrono::TimeDelta;
use tracing::debug;

use super::error::{MacroError, MacroResult};
use super::interval::{interval_seconds, parse_interval};
use super::MacroEngine;
use crate::dialect::{helpers, MacroDialect};
use crate::tsdb::{setup_fill_mode, QueryContext, TimeRange};

const DAY_SECONDS: f64 = 86_400.0;

const NEEDS_COLUMN: &str = "time column";
const NEEDS_GROUP_ARGS: &str = "time column and interval and optional fill value";

/// Supported macros.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Macro {
    /// `$__time(col)` → `col AS "time"`
    Time,
    /// `$__timeFilter(col)` → `col BETWEEN <from> AND <to>`
    TimeFilter,
    /// `$__timeFrom()` → `'<from>'`
    TimeFrom,
    /// `$__timeTo()` → `'<to>'`
    TimeTo,
    /// `$__timeGroup(col, interval [, fill])`
    TimeGroup,
    /// `$__timeGroupAlias(col, interval [, fill])`
    TimeGroupAlias,
}

impl Macro {
    /// Look up a macro by the name used after `$`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "__time" => Some(Macro::Time),
            "__timeFilter" => Some(Macro::TimeFilter),
            "__timeFrom" => Some(Macro::TimeFrom),
            "__timeTo" => Some(Macro::TimeTo),
            "__timeGroup" => Some(Macro::TimeGroup),
            "__timeGroupAlias" => Some(Macro::TimeGroupAlias),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Macro::Time => "__time",
            Macro::TimeFilter => "__timeFilter",
            Macro::TimeFrom => "__timeFrom",
            Macro::TimeTo => "__timeTo",
            Macro::TimeGroup => "__timeGroup",
            Macro::TimeGroupAlias => "__timeGroupAlias",
        }
    }
}

impl<D: MacroDialect> MacroEngine<D> {
    /// Evaluate one macro call.
    ///
    /// `args` are already split and trimmed. The only side effect is fill
    /// mode registration on `query` by the `__timeGroup` macros.
    pub fn evaluate(
        &self,
        query: &mut dyn QueryContext,
        time_range: &TimeRange,
        name: &str,
        args: &[&str],
    ) -> MacroResult<String> {
        debug!(macro_name = name, ?args, dialect = self.dialect.name(), "evaluating macro");

        let Some(mac) = Macro::from_name(name) else {
            return Err(MacroError::UnknownMacro(name.to_string()));
        };

        match mac {
            Macro::Time => {
                let column = time_column(name, args)?;
                Ok(self.dialect.alias_time(column))
            }
            Macro::TimeFilter => {
                let column = time_column(name, args)?;
                Ok(self.dialect.time_filter(
                    column,
                    &time_range.from_utc(),
                    &time_range.to_utc(),
                ))
            }
            Macro::TimeFrom => Ok(self.dialect.instant_literal(&time_range.from_utc())),
            Macro::TimeTo => Ok(self.dialect.instant_literal(&time_range.to_utc())),
            Macro::TimeGroup => self.time_group(query, name, args),
            Macro::TimeGroupAlias => {
                let group = self.time_group(query, Macro::TimeGroup.name(), args)?;
                Ok(self.dialect.alias_time(&group))
            }
        }
    }

    fn time_group(
        &self,
        query: &mut dyn QueryContext,
        name: &str,
        args: &[&str],
    ) -> MacroResult<String> {
        let [column, raw_interval, rest @ ..] = args else {
            return Err(MacroError::missing(name, NEEDS_GROUP_ARGS));
        };

        let interval_token = helpers::strip_single_quotes(raw_interval);
        if let Some(unit) = self.dialect.calendar_unit(interval_token) {
            return Ok(self.dialect.truncate_to_unit(column, unit));
        }

        let interval = parse_interval(interval_token)
            .ok()
            .filter(|interval| !interval.is_zero())
            .ok_or_else(|| MacroError::InvalidInterval(raw_interval.to_string()))?;

        if let Some(fill) = rest.first() {
            setup_fill_mode(query, interval, fill)?;
        }

        let buckets_per_day = buckets_per_day(&interval);
        if buckets_per_day < 1.0 {
            return Err(MacroError::IntervalTooCoarse {
                interval: raw_interval.to_string(),
                buckets_per_day,
            });
        }

        Ok(self.dialect.bucket_floor(column, buckets_per_day))
    }
}

fn time_column<'a>(name: &str, args: &[&'a str]) -> MacroResult<&'a str> {
    match args.first() {
        Some(&column) if !column.is_empty() => Ok(column),
        _ => Err(MacroError::missing(name, NEEDS_COLUMN)),
    }
}

/// Number of `interval`-wide buckets in one day.
pub fn buckets_per_day(interval: &TimeDelta) -> f64 {
    DAY_SECONDS / interval_seconds(interval)
}
