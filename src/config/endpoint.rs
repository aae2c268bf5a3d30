//! Query endpoint configuration for an Oracle datasource.

use serde::Serialize;
use tracing::info;

use super::datasource::DataSource;
use crate::macros::MacroEngine;

/// Driver name registered for Oracle datasources.
pub const DRIVER_NAME: &str = "oci8";

/// Column types whose values can be used as series names.
pub const METRIC_COLUMN_TYPES: [&str; 5] = ["CHAR", "VARCHAR", "VARCHAR2", "TEXT", "NUMBER"];

/// Everything a SQL query endpoint needs to run queries for one datasource.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndpointConfig {
    pub driver_name: &'static str,
    #[serde(skip)]
    pub connection_string: String,
    /// Same as `connection_string` with the password masked.
    pub redacted_connection_string: String,
    pub metric_column_types: Vec<String>,
    pub timescaledb: bool,
}

impl EndpointConfig {
    pub fn from_datasource(datasource: &DataSource) -> Self {
        let config = Self {
            driver_name: DRIVER_NAME,
            connection_string: datasource.connection_string(),
            redacted_connection_string: datasource.redacted_connection_string(),
            metric_column_types: METRIC_COLUMN_TYPES.iter().map(|t| t.to_string()).collect(),
            timescaledb: datasource.json_data.timescaledb,
        };

        info!(
            datasource = %datasource.name,
            driver = DRIVER_NAME,
            connection = %config.redacted_connection_string,
            "created query endpoint"
        );

        config
    }

    /// Whether values of a column type can be used as series names.
    pub fn is_metric_column_type(&self, type_name: &str) -> bool {
        self.metric_column_types
            .iter()
            .any(|t| t.eq_ignore_ascii_case(type_name))
    }

    /// Macro engine for queries against this endpoint.
    pub fn macro_engine(&self) -> MacroEngine {
        MacroEngine::oracle()
    }
}
