use oracle_macros::config::{EndpointConfig, Settings, SettingsError, DRIVER_NAME};
use std::env;
use std::fs;

const CONFIG: &str = r#"
[datasources.production]
user = "${DATASOURCE_TEST_USER}"
url = "db.example.com:1521"
database = "ORCLPDB1"

[datasources.production.secure_json_data]
password = "${DATASOURCE_TEST_PASSWORD}"

[datasources.local]
name = "Local XE"
user = "scott"
url = "localhost:1521"
database = "XEPDB1"
"#;

#[test]
fn test_settings_from_file_with_env_expansion() {
    let path = env::temp_dir().join(format!("oracle-macros-test-{}.toml", std::process::id()));
    fs::write(&path, CONFIG).unwrap();
    env::set_var("DATASOURCE_TEST_USER", "grafana");
    env::set_var("DATASOURCE_TEST_PASSWORD", "s3cret");

    let settings = Settings::from_file(&path).unwrap();
    let prod = settings.get_datasource("production").unwrap();

    assert_eq!(
        prod.connection_string(),
        "grafana/s3cret@db.example.com:1521/ORCLPDB1"
    );

    let endpoint = EndpointConfig::from_datasource(&prod);
    assert_eq!(endpoint.driver_name, DRIVER_NAME);
    assert_eq!(
        endpoint.redacted_connection_string,
        "grafana/***@db.example.com:1521/ORCLPDB1"
    );

    env::remove_var("DATASOURCE_TEST_USER");
    env::remove_var("DATASOURCE_TEST_PASSWORD");
    fs::remove_file(&path).unwrap();
}

#[test]
fn test_explicit_name_is_kept() {
    let settings = Settings::from_toml(CONFIG).unwrap();
    assert_eq!(settings.datasources["local"].name, "Local XE");
    assert_eq!(settings.datasources["production"].name, "production");
}

#[test]
fn test_unset_env_var_is_an_error() {
    let settings = Settings::from_toml(
        r#"
[datasources.broken]
user = "${DATASOURCE_TEST_UNSET_12345}"
"#,
    )
    .unwrap();

    assert!(matches!(
        settings.get_datasource("broken"),
        Err(SettingsError::MissingEnvVar(_))
    ));
}

#[test]
fn test_missing_config_file() {
    assert!(matches!(
        Settings::from_file("/nonexistent/oracle-macros.toml"),
        Err(SettingsError::FileNotFound(_))
    ));
}

#[test]
fn test_endpoint_macro_engine() {
    let settings = Settings::from_toml(CONFIG).unwrap();
    let endpoint = EndpointConfig::from_datasource(&settings.get_datasource("local").unwrap());
    let engine = endpoint.macro_engine();
    assert_eq!(
        engine
            .interpolate(
                &mut oracle_macros::Query::new("A"),
                &oracle_macros::TimeRange::from_epoch_millis(0, 0).unwrap(),
                "$__time(ts)"
            )
            .unwrap(),
        "ts AS \"time\""
    );
}
