use chrono::TimeDelta;
use oracle_macros::tsdb::{setup_fill_mode, FillMode, FillModeError, FillSettings, Query};
use serde_json::json;

#[test]
fn test_null_fill_model() {
    let mut query = Query::new("A");
    setup_fill_mode(&mut query, TimeDelta::seconds(30), "NULL").unwrap();

    assert_eq!(query.model["fill"], json!(true));
    assert_eq!(query.model["fillInterval"], json!(30.0));
    assert_eq!(query.model["fillMode"], json!("null"));
    assert!(query.model.get("fillValue").is_none());
}

#[test]
fn test_value_fill_model() {
    let mut query = Query::new("A");
    setup_fill_mode(&mut query, TimeDelta::milliseconds(1500), "42").unwrap();

    assert_eq!(query.model["fillInterval"], json!(1.5));
    assert_eq!(query.model["fillMode"], json!("value"));
    assert_eq!(query.model["fillValue"], json!(42.0));
    assert_eq!(
        query.fill_settings(),
        Some(FillSettings {
            interval: TimeDelta::milliseconds(1500),
            mode: FillMode::Value(42.0),
        })
    );
}

#[test]
fn test_later_registration_overwrites() {
    let mut query = Query::new("A");
    setup_fill_mode(&mut query, TimeDelta::minutes(1), "7").unwrap();
    setup_fill_mode(&mut query, TimeDelta::minutes(5), "previous").unwrap();

    let settings = query.fill_settings().unwrap();
    assert_eq!(settings.mode, FillMode::Previous);
    assert_eq!(settings.interval, TimeDelta::minutes(5));
}

#[test]
fn test_invalid_fill_value() {
    let mut query = Query::new("A");
    assert_eq!(
        setup_fill_mode(&mut query, TimeDelta::minutes(1), ""),
        Err(FillModeError::InvalidValue(String::new()))
    );
    assert!(query.model.is_empty());
}

#[test]
fn test_existing_model_keys_are_kept() {
    let mut query: Query = serde_json::from_value(json!({
        "refId": "A",
        "model": { "rawSql": "SELECT 1 FROM dual", "format": "time_series" }
    }))
    .unwrap();
    setup_fill_mode(&mut query, TimeDelta::minutes(1), "NULL").unwrap();

    assert_eq!(query.raw_sql(), Some("SELECT 1 FROM dual"));
    assert_eq!(query.model["format"], json!("time_series"));
}
