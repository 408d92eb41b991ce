use std::collections::HashMap;

use padelbook_api::config::ApiConfig;
use pretty_assertions::assert_eq;
use tracing::Level;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn test_defaults() {
    let config =
        ApiConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/padelbook")]))
            .unwrap();

    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 3000);
    assert_eq!(config.database_url, "postgres://localhost/padelbook");
    assert_eq!(config.max_connections, 5);
    assert_eq!(config.log_level, Level::INFO);
    assert_eq!(config.cors_origins, None);
    assert_eq!(config.request_timeout, 30);
    assert_eq!(config.server_addr(), "0.0.0.0:3000");
}

#[test]
fn test_overrides() {
    let config = ApiConfig::from_lookup(lookup(&[
        ("DATABASE_URL", "postgres://db/padelbook"),
        ("API_HOST", "127.0.0.1"),
        ("API_PORT", "8080"),
        ("DATABASE_MAX_CONNECTIONS", "20"),
        ("LOG_LEVEL", "DEBUG"),
        ("API_CORS_ORIGINS", "https://a.example, https://b.example,"),
        ("API_REQUEST_TIMEOUT_SECONDS", "5"),
    ]))
    .unwrap();

    assert_eq!(config.server_addr(), "127.0.0.1:8080");
    assert_eq!(config.max_connections, 20);
    assert_eq!(config.log_level, Level::DEBUG);
    assert_eq!(
        config.cors_origins,
        Some(vec![
            "https://a.example".to_string(),
            "https://b.example".to_string()
        ])
    );
    assert_eq!(config.request_timeout, 5);
}

#[test]
fn test_database_url_is_required() {
    let err = ApiConfig::from_lookup(lookup(&[])).unwrap_err();
    assert!(err.to_string().contains("DATABASE_URL"));
}

#[test]
fn test_invalid_port_is_an_error() {
    let result = ApiConfig::from_lookup(lookup(&[
        ("DATABASE_URL", "postgres://localhost/padelbook"),
        ("API_PORT", "eighty"),
    ]));
    assert!(result.is_err());
}

#[test]
fn test_unparsable_timeout_falls_back() {
    let config = ApiConfig::from_lookup(lookup(&[
        ("DATABASE_URL", "postgres://localhost/padelbook"),
        ("API_REQUEST_TIMEOUT_SECONDS", "soon"),
    ]))
    .unwrap();
    assert_eq!(config.request_timeout, 30);
}
