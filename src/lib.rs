//! # oracle-macros
//!
//! Time-series SQL macro expansion for Oracle datasources.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │       SQL template with $__timeFilter(ts), ...           │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [macros::scanner]
//! ┌─────────────────────────────────────────────────────────┐
//! │       Directive calls: name + trimmed arguments          │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [macros::evaluator + dialect]
//! ┌─────────────────────────────────────────────────────────┐
//! │  Oracle SQL (+ fill mode recorded on the query model)    │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Around the engine:
//!
//! - [`tsdb`] - time ranges, the query context and fill modes
//! - [`transform`] - typed conversion of raw driver rows
//! - [`config`] - datasource settings and endpoint configuration

pub mod config;
pub mod dialect;
pub mod macros;
pub mod transform;
pub mod tsdb;


/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::config::{DataSource, EndpointConfig, Settings};
    pub use crate::dialect::{MacroDialect, Oracle};
    pub use crate::macros::{MacroEngine, MacroError, MacroResult};
    pub use crate::transform::{ColumnType, RowTransformer, RowValue};
    pub use crate::tsdb::{FillMode, FillSettings, Query, QueryContext, TimeRange};
}

pub use macros::{MacroEngine, MacroError};
pub use tsdb::{Query, QueryContext, TimeRange};
