//! Oracle datasource definition.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::settings::{expand_env_vars, SettingsError};

/// Key of the password in [`DataSource::secure_json_data`].
pub const PASSWORD_KEY: &str = "password";

/// An Oracle datasource as configured by the user.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DataSource {
    /// Datasource name.
    pub name: String,

    /// Database user.
    pub user: String,

    /// Host and port, or a TNS alias (`db.example.com:1521`).
    pub url: String,

    /// Service name.
    pub database: String,

    /// Already-decrypted secrets (`password`).
    pub secure_json_data: HashMap<String, String>,

    /// Non-secret options.
    pub json_data: JsonData,
}

/// Non-secret datasource options.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct JsonData {
    /// Kept for parity with the Postgres datasource; Oracle ignores it.
    pub timescaledb: bool,
}

impl DataSource {
    /// The configured password, or empty.
    pub fn password(&self) -> &str {
        self.secure_json_data
            .get(PASSWORD_KEY)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Build the OCI connection string: `user/password@url/database`.
    pub fn connection_string(&self) -> String {
        format!(
            "{}/{}@{}/{}",
            self.user,
            self.password(),
            self.url,
            self.database
        )
    }

    /// Connection string with the password masked, for logs.
    pub fn redacted_connection_string(&self) -> String {
        format!("{}/***@{}/{}", self.user, self.url, self.database)
    }

    /// Expand `${VAR}` references in connection fields and secrets.
    pub fn resolve_env(&self) -> Result<Self, SettingsError> {
        let secure_json_data = self
            .secure_json_data
            .iter()
            .map(|(key, value)| Ok((key.clone(), expand_env_vars(value)?)))
            .collect::<Result<HashMap<_, _>, SettingsError>>()?;

        Ok(Self {
            name: self.name.clone(),
            user: expand_env_vars(&self.user)?,
            url: expand_env_vars(&self.url)?,
            database: expand_env_vars(&self.database)?,
            secure_json_data,
            json_data: self.json_data.clone(),
        })
    }
}
