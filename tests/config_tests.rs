// Config loading and validation tests

use upfmon::config::AppConfig;

const VALID_CONFIG: &str = r#"
[server]
port = 8081
host = "0.0.0.0"

[upstream]
base_url = "http://localhost:8080"
request_timeout_ms = 5000

[publishing]
broadcast_capacity = 60

[monitoring]
poll_interval_ms = 2000
stats_log_interval_secs = 60
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.server.port, 8081);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.upstream.base_url, "http://localhost:8080");
    assert_eq!(config.upstream.request_timeout_ms, 5000);
    assert_eq!(config.publishing.broadcast_capacity, 60);
    assert_eq!(config.monitoring.poll_interval_ms, 2000);
    assert_eq!(config.monitoring.stats_log_interval_secs, 60);
}

#[test]
fn test_config_poll_interval_defaults_to_2000() {
    let without = VALID_CONFIG.replace("poll_interval_ms = 2000\n", "");
    let config = AppConfig::load_from_str(&without).expect("load_from_str");
    assert_eq!(config.monitoring.poll_interval_ms, 2000);
}

#[test]
fn test_config_request_timeout_defaults_to_5000() {
    let without = VALID_CONFIG.replace("request_timeout_ms = 5000\n", "");
    let config = AppConfig::load_from_str(&without).expect("load_from_str");
    assert_eq!(config.upstream.request_timeout_ms, 5000);
}

#[test]
fn test_config_validation_rejects_invalid_port() {
    let bad = VALID_CONFIG.replace("port = 8081", "port = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("server.port"));
}

#[test]
fn test_config_validation_rejects_empty_base_url() {
    let bad = VALID_CONFIG.replace(
        "base_url = \"http://localhost:8080\"",
        "base_url = \"\"",
    );
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("upstream.base_url"));
}

#[test]
fn test_config_validation_rejects_request_timeout_zero() {
    let bad = VALID_CONFIG.replace("request_timeout_ms = 5000", "request_timeout_ms = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("request_timeout_ms"));
}

#[test]
fn test_config_validation_rejects_broadcast_capacity_zero() {
    let bad = VALID_CONFIG.replace("broadcast_capacity = 60", "broadcast_capacity = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("broadcast_capacity"));
}

#[test]
fn test_config_validation_rejects_poll_interval_zero() {
    let bad = VALID_CONFIG.replace("poll_interval_ms = 2000", "poll_interval_ms = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("poll_interval_ms"));
}

#[test]
fn test_config_validation_rejects_stats_log_interval_zero() {
    let bad = VALID_CONFIG.replace(
        "stats_log_interval_secs = 60",
        "stats_log_interval_secs = 0",
    );
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("stats_log_interval_secs"));
}
