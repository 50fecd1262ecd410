//! Integration tests for configuration management

use kintrace::config::{Config, ConfigOverrides};

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert_eq!(config.highlight.stroke, "orange");
    assert_eq!(config.highlight.stroke_width, "0.3em");
    assert!(
        !config.paths.graphs_dir.is_empty(),
        "Default graphs_dir should not be empty"
    );
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
graphs_dir = "./graphs"
out_dir = "./out"

[highlight]
stroke = "teal"
stroke_width = "2px"
"#;

    let config = Config::from_toml(toml_str).expect("parse config");
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.graphs_dir, "./graphs");
    assert_eq!(config.highlight.stroke, "teal");
}

#[test]
fn test_config_missing_sections_default() {
    let config = Config::from_toml("[logging]\nlevel = \"warn\"\n").expect("parse config");
    assert_eq!(config.logging.level, "warn");
    assert!(config.paths.out_dir.is_empty());
    assert!(config.highlight.stroke.is_empty());
}

#[test]
fn test_expands_kintrace_variable() {
    let config =
        Config::from_toml("[logging]\nlevel = \"warn\"\n\n[paths]\ngraphs_dir = \"$KINTRACE/graphs\"\nout_dir = \"\"\n")
            .expect("parse config");
    assert!(
        !config.paths.graphs_dir.contains("$KINTRACE"),
        "variable should be expanded"
    );
    assert!(config.paths.graphs_dir.ends_with("graphs"));
}

#[test]
fn test_apply_overrides() {
    let mut config = Config::from_defaults();
    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        verbose: Some(true),
        stroke: Some("crimson".to_string()),
        ..ConfigOverrides::default()
    };

    config.apply_overrides(&overrides);
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.verbose);
    assert_eq!(config.highlight.stroke, "crimson");
    // Untouched values keep their defaults
    assert_eq!(config.highlight.stroke_width, "0.3em");
}

#[test]
fn test_get_set_unset_roundtrip() {
    let defaults = Config::from_defaults();
    let mut config = defaults.clone();

    config.set("stroke", "teal").expect("set stroke");
    assert_eq!(config.get("stroke"), Some("teal".to_string()));

    config.unset("stroke", &defaults).expect("unset stroke");
    assert_eq!(config.get("stroke"), Some("orange".to_string()));

    assert!(config.set("unknown", "x").is_err());
    assert!(config.get("unknown").is_none());
}

#[test]
fn test_set_verbose_validates_boolean() {
    let mut config = Config::from_defaults();
    assert!(config.set("verbose", "not-a-bool").is_err());
    assert!(config.set("verbose", "true").is_ok());
    assert!(config.logging.verbose);
}
