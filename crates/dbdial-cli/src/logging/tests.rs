use super::*;

#[test]
fn test_legacy_levels() {
    assert_eq!(legacy_level(Some("DEBUG")), "debug");
    assert_eq!(legacy_level(Some("INFO")), "info");
    assert_eq!(legacy_level(Some("ERROR")), "error");
    assert_eq!(legacy_level(Some("WARN")), "warn");
}

#[test]
fn test_unknown_legacy_level_defaults_to_warn() {
    assert_eq!(legacy_level(None), "warn");
    assert_eq!(legacy_level(Some("")), "warn");
    assert_eq!(legacy_level(Some("debug")), "warn");
    assert_eq!(legacy_level(Some("TRACE")), "warn");
}

#[test]
fn test_default_config() {
    let config = LoggingConfig::default();
    assert!(config.enable_console_logs);
    assert!(!config.enable_json_logs);
    assert_eq!(config.default_filter, "warn");
}
