use chrono::{TimeDelta, TimeZone, Utc};
use oracle_macros::macros::{MacroEngine, MacroError};
use oracle_macros::tsdb::{FillMode, FillModeError, FillSettings, Query, TimeRange};

fn range() -> TimeRange {
    TimeRange::new(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
    )
}

fn expand_with(query: &mut Query, sql: &str) -> Result<String, MacroError> {
    MacroEngine::oracle().interpolate(query, &range(), sql)
}

fn expand(sql: &str) -> Result<String, MacroError> {
    expand_with(&mut Query::new("A"), sql)
}

#[test]
fn test_hourly_buckets() {
    assert_eq!(
        expand("$__timeGroup(ts, '1h')").unwrap(),
        "trunc( (CAST(ts as DATE) - trunc(ts)) * 24 )/ 24 + trunc( ts )"
    );
}

#[test]
fn test_unquoted_interval() {
    assert_eq!(
        expand("$__timeGroup(ts, 30m)").unwrap(),
        "trunc( (CAST(ts as DATE) - trunc(ts)) * 48 )/ 48 + trunc( ts )"
    );
}

#[test]
fn test_uneven_buckets_keep_fractional_count() {
    assert_eq!(
        expand("$__timeGroup(ts, '7m')").unwrap(),
        "trunc( (CAST(ts as DATE) - trunc(ts)) * 205.71428571428572 )/ 205.71428571428572 + trunc( ts )"
    );
}

#[test]
fn test_one_day_is_the_widest_fixed_bucket() {
    assert_eq!(
        expand("$__timeGroup(ts, '1d')").unwrap(),
        "trunc( (CAST(ts as DATE) - trunc(ts)) * 1 )/ 1 + trunc( ts )"
    );
    assert_eq!(
        expand("$__timeGroup(ts, '24h')").unwrap(),
        expand("$__timeGroup(ts, '1d')").unwrap()
    );
}

#[test]
fn test_calendar_units_bypass_interval_parsing() {
    assert_eq!(expand("$__timeGroup(ts, 'YYYY')").unwrap(), "trunc(ts, 'YYYY')");
    assert_eq!(expand("$__timeGroup(ts, MM)").unwrap(), "trunc(ts, 'MM')");
    assert_eq!(expand("$__timeGroup(ts, '1D')").unwrap(), "trunc(ts, 'D')");
    assert_eq!(expand("$__timeGroup(ts, '1W')").unwrap(), "trunc(ts, 'IW')");
    assert_eq!(expand("$__timeGroup(ts, 'HH24')").unwrap(), "trunc(ts, 'HH24')");
}

#[test]
fn test_calendar_unit_ignores_fill() {
    let mut query = Query::new("A");
    let sql = expand_with(&mut query, "$__timeGroup(ts, 'DD', not_a_number)").unwrap();

    assert_eq!(sql, "trunc(ts, 'DD')");
    assert_eq!(query.fill_settings(), None);
}

#[test]
fn test_interval_longer_than_a_day() {
    let err = expand("$__timeGroup(ts, '2d')").unwrap_err();
    assert_eq!(
        err,
        MacroError::IntervalTooCoarse {
            interval: "'2d'".into(),
            buckets_per_day: 0.5,
        }
    );
}

#[test]
fn test_negative_interval_is_too_coarse() {
    assert!(matches!(
        expand("$__timeGroup(ts, '-1h')"),
        Err(MacroError::IntervalTooCoarse { .. })
    ));
}

#[test]
fn test_invalid_interval() {
    let err = expand("$__timeGroup(ts, 'fortnight')").unwrap_err();
    assert_eq!(err, MacroError::InvalidInterval("'fortnight'".into()));
    assert_eq!(err.to_string(), "error parsing interval 'fortnight'");
}

#[test]
fn test_zero_interval_is_invalid() {
    assert_eq!(
        expand("$__timeGroup(ts, '0s')"),
        Err(MacroError::InvalidInterval("'0s'".into()))
    );
}

#[test]
fn test_missing_interval() {
    let err = expand("$__timeGroup(ts)").unwrap_err();
    assert_eq!(
        err.to_string(),
        "macro __timeGroup needs time column and interval and optional fill value"
    );
}

#[test]
fn test_fill_modes_are_recorded() {
    let cases = [
        ("NULL", FillMode::Null),
        ("previous", FillMode::Previous),
        ("0", FillMode::Value(0.0)),
        ("-2.5", FillMode::Value(-2.5)),
    ];

    for (arg, mode) in cases {
        let mut query = Query::new("A");
        expand_with(&mut query, &format!("$__timeGroup(ts, '5m', {})", arg)).unwrap();
        assert_eq!(
            query.fill_settings(),
            Some(FillSettings {
                interval: TimeDelta::minutes(5),
                mode,
            })
        );
    }
}

#[test]
fn test_invalid_fill_value_propagates() {
    let err = expand("$__timeGroup(ts, '5m', zero)").unwrap_err();
    assert_eq!(
        err,
        MacroError::FillMode(FillModeError::InvalidValue("zero".into()))
    );
    assert_eq!(err.to_string(), "error parsing fill value zero");
}

#[test]
fn test_alias_appends_time_alias() {
    for interval in ["'1h'", "'5m'", "'MM'", "'1W'"] {
        let plain = expand(&format!("$__timeGroup(ts, {})", interval)).unwrap();
        let alias = expand(&format!("$__timeGroupAlias(ts, {})", interval)).unwrap();
        assert_eq!(alias, format!("{} AS \"time\"", plain));
    }
}

#[test]
fn test_alias_propagates_identical_error() {
    for args in ["ts", "ts, 'fortnight'", "ts, '2d'", "ts, '5m', zero"] {
        let plain = expand(&format!("$__timeGroup({})", args)).unwrap_err();
        let alias = expand(&format!("$__timeGroupAlias({})", args)).unwrap_err();
        assert_eq!(alias, plain);
    }
}

#[test]
fn test_alias_records_fill_mode() {
    let mut query = Query::new("A");
    expand_with(&mut query, "$__timeGroupAlias(ts, '1m', previous)").unwrap();
    assert_eq!(
        query.fill_settings().map(|s| s.mode),
        Some(FillMode::Previous)
    );
}
