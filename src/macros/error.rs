//! Macro expansion error types.

use thiserror::Error;

use crate::tsdb::FillModeError;

/// Result type for macro expansion.
pub type MacroResult<T> = Result<T, MacroError>;

/// Errors raised while evaluating a macro.
///
/// Only the first error of an expansion pass is returned to the caller.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MacroError {
    /// Macro called with fewer arguments than it requires.
    #[error("macro {name} needs {needs}")]
    MissingArgument { name: String, needs: &'static str },

    /// Macro name is not one of the supported macros.
    #[error("unknown macro {0}")]
    UnknownMacro(String),

    /// Interval is neither a calendar unit nor a parseable duration.
    #[error("error parsing interval {0}")]
    InvalidInterval(String),

    /// Fixed-width bucket is wider than one day.
    #[error(
        "interval {interval} is longer than one day ({buckets_per_day} buckets per day), \
         use a calendar unit such as 'DD' or 'IW' instead"
    )]
    IntervalTooCoarse {
        interval: String,
        buckets_per_day: f64,
    },

    /// Fill mode registration failed.
    #[error(transparent)]
    FillMode(#[from] FillModeError),
}

impl MacroError {
    pub(crate) fn missing(name: &str, needs: &'static str) -> Self {
        Self::MissingArgument {
            name: name.to_string(),
            needs,
        }
    }
}
