//! Integration tests for kiosk-config schema types.

use kiosk_config::schema::{InferenceConfig, KioskConfig, LoggingConfig, ServerConfig};
use std::time::Duration;

#[test]
fn kiosk_config_default_values() {
    let config = KioskConfig::default();
    assert_eq!(config.server.name, "kiosk");
    assert_eq!(config.server.resource_uri, "server://info");
    assert_eq!(config.inference.token_env, "HF_TOKEN");
    assert_eq!(config.inference.timeout_secs, 60);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn kiosk_config_serde_roundtrip() {
    let config = KioskConfig::default();
    let json = serde_json::to_string(&config).expect("serialize");
    let back: KioskConfig = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back.inference.model, config.inference.model);
    assert_eq!(back.server.description, config.server.description);
}

#[test]
fn unknown_keys_are_rejected() {
    let res = serde_json::from_str::<KioskConfig>(r#"{"runtime": {}}"#);
    assert!(res.is_err());
    let res = serde_json::from_str::<KioskConfig>(r#"{"inference": {"token": "secret"}}"#);
    assert!(res.is_err(), "tokens must not be configurable in files");
}

#[test]
fn inference_timeout_returns_duration() {
    let inf = InferenceConfig {
        timeout_secs: 5,
        ..InferenceConfig::default()
    };
    assert_eq!(inf.timeout(), Duration::from_secs(5));
}

#[test]
fn inference_endpoint_joins_without_double_slash() {
    let inf = InferenceConfig {
        base_url: "http://localhost:8080/models/".into(),
        model: "org/model".into(),
        ..InferenceConfig::default()
    };
    assert_eq!(inf.endpoint(), "http://localhost:8080/models/org/model");
}

#[test]
fn partial_sections_fill_defaults() {
    let config: KioskConfig =
        serde_json::from_str(r#"{"server": {"name": "custom"}}"#).expect("de");
    assert_eq!(config.server.name, "custom");
    assert_eq!(config.server.resource_uri, ServerConfig::default().resource_uri);
    assert_eq!(config.logging.level, LoggingConfig::default().level);
}
