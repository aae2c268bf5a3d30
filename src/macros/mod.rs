//! Time macro expansion.
//!
//! Rewrites a SQL template containing macro calls into plain SQL for a
//! given time range:
//!
//! ```text
//! SELECT $__timeGroupAlias(ts, '5m'), avg(v)      SELECT trunc( (CAST(ts as DATE) - trunc(ts)) * 288 )/ 288
//! FROM metrics                               ──►           + trunc( ts ) AS "time", avg(v)
//! WHERE $__timeFilter(ts)                         FROM metrics
//!                                                 WHERE ts BETWEEN TO_TIMESTAMP(...) AND TO_TIMESTAMP(...)
//! ```
//!
//! - [`scanner`] - finds `$name(args)` calls and splices in replacements
//! - [`evaluator`] - what each macro expands to
//! - [`interval`] - interval strings (`5m`, `1h30m`)
//!
//! # Usage
//!
//! ```ignore
//! use oracle_macros::macros::MacroEngine;
//! use oracle_macros::tsdb::{Query, TimeRange};
//!
//! let engine = MacroEngine::oracle();
//! let mut query = Query::new("A");
//! let sql = engine.interpolate(&mut query, &range, "SELECT $__time(ts) FROM t")?;
//! ```

mod error;
pub mod evaluator;
pub mod interval;
pub mod scanner;

pub use error::{MacroError, MacroResult};
pub use evaluator::Macro;
pub use scanner::{find_directives, replace_directives, DirectiveCall};

use tracing::debug_span;

use crate::dialect::{MacroDialect, Oracle};
use crate::tsdb::{QueryContext, TimeRange};

/// Expands time macros for one SQL dialect.
///
/// Holds no per-query state: the time range and query context are passed
/// to every call, so one engine can serve concurrent queries.
#[derive(Debug, Clone, Default)]
pub struct MacroEngine<D: MacroDialect = Oracle> {
    dialect: D,
}

impl MacroEngine<Oracle> {
    /// Engine for the Oracle dialect.
    pub fn oracle() -> Self {
        Self::new(Oracle)
    }
}

impl<D: MacroDialect> MacroEngine<D> {
    pub fn new(dialect: D) -> Self {
        Self { dialect }
    }

    /// Expand every macro call in `sql`.
    ///
    /// Returns the first evaluation error, if any. Every call is still
    /// evaluated, so fill mode side effects of later calls are applied even
    /// when an earlier call fails.
    pub fn interpolate(
        &self,
        query: &mut dyn QueryContext,
        time_range: &TimeRange,
        sql: &str,
    ) -> MacroResult<String> {
        let _span = debug_span!("interpolate", dialect = self.dialect.name()).entered();

        replace_directives(sql, |call| {
            self.evaluate(&mut *query, time_range, call.name, &call.args())
        })
    }
}
