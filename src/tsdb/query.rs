//! Query context.
//!
//! The macro engine only needs one thing from the query being built: a
//! place to record how gaps between time buckets should be filled.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::fill::{FillMode, FillSettings};
use crate::macros::interval::interval_seconds;

/// The query being built, as seen by macro expansion.
pub trait QueryContext {
    /// Record the fill mode for the bucket interval.
    fn set_fill_mode(&mut self, settings: FillSettings);
}

/// A single panel query with its raw JSON model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    /// Query identifier within a request (`A`, `B`, ...).
    pub ref_id: String,

    /// Raw query model as sent by the dashboard.
    #[serde(default)]
    pub model: Map<String, Value>,

    /// Suggested interval between points.
    #[serde(default)]
    pub interval_ms: i64,

    /// Maximum number of points the panel can display.
    #[serde(default)]
    pub max_data_points: i64,
}

impl Query {
    pub fn new(ref_id: impl Into<String>) -> Self {
        Self {
            ref_id: ref_id.into(),
            ..Default::default()
        }
    }

    /// The raw SQL template, if the model carries one.
    pub fn raw_sql(&self) -> Option<&str> {
        self.model.get("rawSql").and_then(Value::as_str)
    }

    /// Read back fill settings written by [`QueryContext::set_fill_mode`].
    pub fn fill_settings(&self) -> Option<FillSettings> {
        if !self.model.get("fill").and_then(Value::as_bool).unwrap_or(false) {
            return None;
        }

        let seconds = self.model.get("fillInterval").and_then(Value::as_f64)?;
        let mode = match self.model.get("fillMode").and_then(Value::as_str)? {
            "null" => FillMode::Null,
            "previous" => FillMode::Previous,
            "value" => FillMode::Value(self.model.get("fillValue").and_then(Value::as_f64)?),
            _ => return None,
        };

        Some(FillSettings {
            interval: TimeDelta::nanoseconds((seconds * 1e9).round() as i64),
            mode,
        })
    }
}

impl QueryContext for Query {
    fn set_fill_mode(&mut self, settings: FillSettings) {
        self.model.insert("fill".into(), Value::Bool(true));
        self.model.insert(
            "fillInterval".into(),
            Value::from(interval_seconds(&settings.interval)),
        );
        self.model
            .insert("fillMode".into(), Value::from(settings.mode.as_str()));
        if let FillMode::Value(value) = settings.mode {
            self.model.insert("fillValue".into(), Value::from(value));
        }
    }
}
