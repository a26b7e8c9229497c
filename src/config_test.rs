use super::*;

#[test]
fn default_matches_stock_site() {
    let config = Config::default();
    assert_eq!(config.log_level, "info");
    assert_eq!(config.scrolled_threshold_px, 50.0);
    assert_eq!(config.active_lookahead_px, 150.0);
    assert_eq!(config.reveal_selectors.len(), 9);
    assert_eq!(config.reveal_selectors[0], ".section-title");
    assert_eq!(config.reveal_stagger_ms, 100);
    assert_eq!(config.form_reset_ms, 5_000);
    assert_eq!(config.typewriter.target, None);
    assert_eq!(config.typewriter.phrases.len(), 4);
}

#[test]
fn default_passes_validation() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn empty_object_yields_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = Config::from_json(r#"{ "log_level": "debug", "typewriter": { "target": ".hero-subtitle" } }"#)
        .unwrap();
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.typewriter.target.as_deref(), Some(".hero-subtitle"));
    assert_eq!(config.typewriter.type_ms, 100);
    assert_eq!(config.form_reset_ms, 5_000);
}

#[test]
fn log_level_is_case_insensitive() {
    assert!(Config::from_json(r#"{ "log_level": "WARN" }"#).is_ok());
}

#[test]
fn malformed_json_is_rejected() {
    let err = Config::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn unknown_log_level_is_rejected() {
    let err = Config::from_json(r#"{ "log_level": "loud" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::LogLevel(ref level) if level == "loud"));
}

#[test]
fn threshold_out_of_range_is_rejected() {
    let err = Config::from_json(r#"{ "reveal_threshold": 1.5 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Threshold(_)));
}

#[test]
fn empty_phrase_list_is_rejected() {
    let err = Config::from_json(r#"{ "typewriter": { "phrases": [] } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::NoPhrases));
    let err = Config::from_json(r#"{ "typewriter": { "phrases": [""] } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::NoPhrases));
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(ConfigError::Threshold(2.0).to_string(), "reveal threshold must be within 0..=1, got 2");
    assert_eq!(ConfigError::LogLevel("x".into()).to_string(), "unknown log level: x");
}
