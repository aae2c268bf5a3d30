//! TOML-based configuration.
//!
//! Supports a config file (oracle-macros.toml) with environment variable
//! expansion in connection fields and secrets.
//!
//! Example configuration:
//! ```toml
//! [datasources.production]
//! user = "grafana"
//! url = "db.example.com:1521"
//! database = "ORCLPDB1"
//!
//! [datasources.production.secure_json_data]
//! password = "${ORACLE_PASSWORD}"
//!
//! [datasources.dev]
//! user = "scott"
//! url = "localhost:1521"
//! database = "XEPDB1"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::datasource::DataSource;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "ORACLE_MACROS_CONFIG";

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Datasource not found: {0}")]
    DatasourceNotFound(String),
}

/// Result type for configuration.
pub type ConfigResult<T> = Result<T, SettingsError>;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Named datasources.
    pub datasources: HashMap<String, DataSource>,
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse settings from TOML text.
    pub fn from_toml(content: &str) -> ConfigResult<Self> {
        let mut settings: Settings = toml::from_str(content)?;
        // Table keys double as names unless a name is given.
        for (key, datasource) in settings.datasources.iter_mut() {
            if datasource.name.is_empty() {
                datasource.name = key.clone();
            }
        }
        Ok(settings)
    }

    /// Load settings from the default config file locations.
    ///
    /// Searches in order:
    /// 1. Environment variable `ORACLE_MACROS_CONFIG`
    /// 2. `./oracle-macros.toml`
    /// 3. `~/.config/oracle-macros/config.toml`
    ///
    /// Returns empty settings if none exists.
    pub fn load() -> ConfigResult<Self> {
        if let Ok(path) = env::var(CONFIG_ENV_VAR) {
            return Self::from_file(&path);
        }

        let local_config = PathBuf::from("oracle-macros.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("oracle-macros").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        Ok(Self::default())
    }

    /// Get a datasource by name, with environment variables expanded.
    pub fn get_datasource(&self, name: &str) -> ConfigResult<DataSource> {
        self.datasources
            .get(name)
            .ok_or_else(|| SettingsError::DatasourceNotFound(name.to_string()))?
            .resolve_env()
    }
}

/// Expand environment variables in a string.
///
/// Supports `${VAR}` and `$VAR` syntax.
pub fn expand_env_vars(s: &str) -> ConfigResult<String> {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            result.push(c);
            continue;
        }

        let var_name: String = if chars.peek() == Some(&'{') {
            chars.next();
            chars.by_ref().take_while(|&ch| ch != '}').collect()
        } else {
            let mut name = String::new();
            while let Some(ch) = chars.next_if(|ch| ch.is_alphanumeric() || *ch == '_') {
                name.push(ch);
            }
            if name.is_empty() {
                // Just a lone $, keep it
                result.push('$');
                continue;
            }
            name
        };

        let value = env::var(&var_name).map_err(|_| SettingsError::MissingEnvVar(var_name))?;
        result.push_str(&value);
    }

    Ok(result)
}
