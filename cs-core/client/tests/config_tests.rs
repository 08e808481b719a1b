//! 客户端配置测试

use cs_client::{ClientConfig, CsClient, CsError};
use std::path::PathBuf;
use std::time::Duration;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("cs-client-config-{}", std::process::id()))
        .join(name)
}

fn sample_config() -> ClientConfig {
    ClientConfig {
        base_url: "https://cloud.example.com/client/api".to_string(),
        api_key: Some("key-1".to_string()),
        async_mode: false,
        poll_interval_ms: 500,
        async_timeout: 120,
        ..Default::default()
    }
}

#[test]
fn test_save_and_load_each_format() {
    for name in ["config.toml", "config.yaml", "config.json"] {
        let path = temp_path(name);
        sample_config().save_to_file(&path).unwrap();

        let loaded = ClientConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.base_url, "https://cloud.example.com/client/api");
        assert_eq!(loaded.api_key.as_deref(), Some("key-1"));
        assert!(!loaded.async_mode);
        assert_eq!(loaded.poll_interval(), Duration::from_millis(500));
        assert_eq!(loaded.async_timeout(), Duration::from_secs(120));

        std::fs::remove_file(&path).unwrap();
    }
}

#[test]
fn test_unsupported_extension() {
    let path = temp_path("config.ini");
    let err = sample_config().save_to_file(&path).unwrap_err();
    assert!(matches!(err, CsError::Config(_)));
}

#[test]
fn test_missing_file() {
    let err = ClientConfig::load_from_file(&temp_path("absent.toml")).unwrap_err();
    assert!(matches!(err, CsError::Config(_)));
}

#[test]
fn test_client_rejects_invalid_config() {
    let config = ClientConfig {
        poll_interval_ms: 0,
        ..Default::default()
    };
    assert!(matches!(CsClient::new(config), Err(CsError::Config(_))));

    assert!(CsClient::new(ClientConfig::new("not a url")).is_err());
}

#[test]
fn test_client_keeps_config() {
    let client = CsClient::new(sample_config()).unwrap();
    assert!(!client.is_async_mode());
    assert_eq!(client.config().async_timeout, 120);
}
