//! Configuration loading tests.

use std::path::Path;

use lite_client::config::{LiteConfig, VerifierSection};

#[test]
fn test_defaults() {
    let cfg = LiteConfig::default();
    assert_eq!(cfg.verifier.max_total_voting_power, 1 << 52);
    assert!(cfg.verifier.allow_trust_skip);
    assert_eq!(cfg.verifier.max_validators, 10_000);
    assert_eq!(cfg.logging.format, "json");
    assert_eq!(cfg.logging.level, "info");
    assert!(cfg.logging.module_levels.is_none());
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let cfg = LiteConfig::from_toml(
        r#"
        [verifier]
        allow_trust_skip = false
        "#,
    )
    .unwrap();
    assert!(!cfg.verifier.allow_trust_skip);
    assert_eq!(cfg.verifier.max_validators, 10_000);
    assert_eq!(cfg.logging, LiteConfig::default().logging);
}

#[test]
fn test_empty_toml_is_default() {
    assert_eq!(LiteConfig::from_toml("").unwrap(), LiteConfig::default());
}

#[test]
fn test_toml_round_trip() {
    let mut cfg = LiteConfig::default();
    cfg.verifier = VerifierSection { max_total_voting_power: 1_000_000, allow_trust_skip: false, max_validators: 150 };
    cfg.logging.level = "debug".to_string();
    cfg.logging.module_levels = Some("lite_client::verifier=trace".to_string());

    let rendered = cfg.to_toml().unwrap();
    assert!(rendered.contains("[verifier]"));
    assert_eq!(LiteConfig::from_toml(&rendered).unwrap(), cfg);
}

#[test]
fn test_reject_unsafe_power_cap() {
    let err = LiteConfig::from_toml(
        r#"
        [verifier]
        max_total_voting_power = 9007199254740992
        "#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("max_total_voting_power"));
}

#[test]
fn test_reject_malformed_toml() {
    assert!(LiteConfig::from_toml("[verifier\nmax_validators = 3").is_err());
    assert!(LiteConfig::from_toml("[verifier]\nmax_validators = \"many\"").is_err());
}

#[test]
fn test_load_or_default_missing_file() {
    let cfg = LiteConfig::load_or_default(Path::new("/nonexistent/lite-client.toml"));
    assert_eq!(cfg, LiteConfig::default());
    assert!(LiteConfig::load(Path::new("/nonexistent/lite-client.toml")).is_err());
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("lite-client-config-{}.toml", std::process::id()));
    std::fs::write(&path, "[logging]\nformat = \"pretty\"\n").unwrap();
    let cfg = LiteConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(cfg.logging.format, "pretty");
    assert_eq!(cfg.verifier, VerifierSection::default());
}

#[test]
fn test_logging_filter_directive() {
    let mut logging = LiteConfig::default().logging;
    assert_eq!(logging.filter_directive(), "info");

    logging.module_levels = Some("lite_client::verifier=debug".to_string());
    assert_eq!(logging.filter_directive(), "info,lite_client::verifier=debug");

    logging.level = "warn".to_string();
    logging.module_levels = Some("  ".to_string());
    assert_eq!(logging.filter_directive(), "warn");
}
