//! Tests for the HTTP client configuration

use authc_providers::http::HttpClientConfig;
use std::time::Duration;

#[test]
fn defaults_match_the_documented_pool_settings() {
    let config = HttpClientConfig::default();
    assert_eq!(config.max_idle_per_host, 10);
    assert_eq!(config.idle_timeout, Duration::from_secs(90));
    assert_eq!(config.keepalive, Duration::from_secs(60));
    assert_eq!(config.timeout, Duration::from_secs(30));
}

#[test]
fn default_user_agent_names_the_client_and_version() {
    let config = HttpClientConfig::default();
    assert!(config.user_agent.starts_with("authc/"));
    assert!(config.user_agent.len() > "authc/".len());
}

#[test]
fn with_timeout_overrides_only_the_timeout() {
    let config = HttpClientConfig::with_timeout(Duration::from_secs(5));
    let defaults = HttpClientConfig::default();

    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(config.max_idle_per_host, defaults.max_idle_per_host);
    assert_eq!(config.idle_timeout, defaults.idle_timeout);
    assert_eq!(config.keepalive, defaults.keepalive);
    assert_eq!(config.user_agent, defaults.user_agent);
}
