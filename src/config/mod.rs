//! Configuration module.
//!
//! Handles datasource definitions, config files and endpoint setup.

mod datasource;
mod endpoint;
mod settings;

pub use datasource::{DataSource, JsonData, PASSWORD_KEY};
pub use endpoint::{EndpointConfig, DRIVER_NAME, METRIC_COLUMN_TYPES};
pub use settings::{expand_env_vars, ConfigResult, Settings, SettingsError, CONFIG_ENV_VAR};
