//! Row value conversion.
//!
//! The OCI driver hands back every column as text (or NULL). Numeric and
//! character columns are converted by their OCI type tag so that series
//! values and labels have the right JSON type; other columns are passed
//! through.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Errors produced while converting a row.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("row has {actual} values but {expected} columns were declared")]
    ColumnCountMismatch { expected: usize, actual: usize },
}

/// OCI type tags the transformer knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OciType {
    /// `SQLT_NUM` - NUMBER
    Number,
    /// `SQLT_CHR` - VARCHAR2
    Char,
    /// `SQLT_AFC` - CHAR
    FixedChar,
}

impl OciType {
    /// Look up a driver type name.
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "SQLT_NUM" => Some(OciType::Number),
            "SQLT_CHR" => Some(OciType::Char),
            "SQLT_AFC" => Some(OciType::FixedChar),
            _ => None,
        }
    }
}

/// A result column as described by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnType {
    pub name: String,
    /// Driver type name, e.g. `SQLT_NUM`.
    pub database_type_name: String,
}

impl ColumnType {
    pub fn new(name: impl Into<String>, database_type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            database_type_name: database_type_name.into(),
        }
    }

    pub fn oci_type(&self) -> Option<OciType> {
        OciType::from_type_name(&self.database_type_name)
    }
}

/// A converted row value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RowValue {
    Null,
    Number(f64),
    Text(String),
}

/// Converts raw driver rows into typed values.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowTransformer;

impl RowTransformer {
    /// Convert one row.
    ///
    /// - `SQLT_NUM`: NULL → `0`, unparseable text is kept as text
    /// - `SQLT_CHR`, `SQLT_AFC`: NULL → `""`
    /// - anything else: passed through
    pub fn transform(
        &self,
        columns: &[ColumnType],
        raw: Vec<Option<String>>,
    ) -> Result<Vec<RowValue>, TransformError> {
        if columns.len() != raw.len() {
            return Err(TransformError::ColumnCountMismatch {
                expected: columns.len(),
                actual: raw.len(),
            });
        }

        Ok(columns
            .iter()
            .zip(raw)
            .map(|(column, value)| convert(column, value))
            .collect())
    }
}

fn convert(column: &ColumnType, value: Option<String>) -> RowValue {
    match (column.oci_type(), value) {
        (Some(OciType::Number), None) => RowValue::Number(0.0),
        (Some(OciType::Number), Some(text)) => match text.trim().parse::<f64>() {
            Ok(number) => RowValue::Number(number),
            Err(_) => {
                debug!(column = %column.name, value = %text, "error converting numeric to float");
                RowValue::Text(text)
            }
        },
        (Some(OciType::Char | OciType::FixedChar), value) => {
            RowValue::Text(value.unwrap_or_default())
        }
        (None, Some(text)) => RowValue::Text(text),
        (None, None) => RowValue::Null,
    }
}
