//! Time-series query types consumed by macro expansion.
//!
//! - [`time_range`] - the `[from, to]` range a query runs over
//! - [`query`] - the query being built and its JSON model
//! - [`fill`] - gap-filling mode registration

pub mod fill;
pub mod query;
pub mod time_range;

pub use fill::{setup_fill_mode, FillMode, FillModeError, FillSettings};
pub use query::{Query, QueryContext};
pub use time_range::{TimeRange, TimeRangeError};
