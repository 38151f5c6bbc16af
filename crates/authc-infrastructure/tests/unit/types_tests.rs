//! Unit tests for configuration types

use authc_infrastructure::config::{ApiConfig, AppConfig, LoggingConfig};

#[test]
fn api_config_defaults() {
    let config = ApiConfig::default();
    assert_eq!(config.base_url, "https://api.example.com");
    assert_eq!(config.login_path, "/login");
    assert_eq!(config.timeout_secs, 30);
}

#[test]
fn login_url_joins_base_and_path() {
    let config = ApiConfig::default();
    assert_eq!(config.login_url(), "https://api.example.com/login");
}

#[test]
fn login_url_does_not_duplicate_the_slash() {
    let config = ApiConfig {
        base_url: "https://api.example.com/".to_string(),
        ..ApiConfig::default()
    };
    assert_eq!(config.login_url(), "https://api.example.com/login");
}

#[test]
fn login_url_with_nested_path() {
    let config = ApiConfig {
        base_url: "https://api.example.com/v1/".to_string(),
        login_path: "/auth/login".to_string(),
        ..ApiConfig::default()
    };
    assert_eq!(config.login_url(), "https://api.example.com/v1/auth/login");
}

#[test]
fn logging_config_defaults() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, "info");
    assert!(!config.json_format);
}

#[test]
fn app_config_default_covers_all_sections() {
    let config = AppConfig::default();
    assert_eq!(config.api.login_url(), "https://api.example.com/login");
    assert_eq!(config.logging.level, "info");
}
