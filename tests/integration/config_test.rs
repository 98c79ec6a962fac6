use std::fs;

use sysdash::core::config::DashboardConfig;
use tempfile::TempDir;

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = DashboardConfig::load_from(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, DashboardConfig::default());
}

#[test]
fn test_save_and_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let config = DashboardConfig {
        bar_width: 30,
        mounts: vec!["/".to_string(), "/data".to_string()],
        color: false,
        ..Default::default()
    };
    config.save_to(&path).unwrap();

    let loaded = DashboardConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "thresholds": { "critical": 90.0 } }"#).unwrap();

    let config = DashboardConfig::load_from(&path).unwrap();
    assert_eq!(config.thresholds.critical, 90.0);
    assert_eq!(config.thresholds.warning, 60.0);
    assert_eq!(config.bar_width, 20);
}

#[test]
fn test_corrupt_or_invalid_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");

    fs::write(&path, "{ not json").unwrap();
    assert_eq!(
        DashboardConfig::load_from(&path).unwrap(),
        DashboardConfig::default()
    );

    fs::write(&path, r#"{ "bar_width": 0 }"#).unwrap();
    assert_eq!(
        DashboardConfig::load_from(&path).unwrap(),
        DashboardConfig::default()
    );
}

#[test]
fn test_assembly_policy_uses_configured_mounts() {
    let config = DashboardConfig {
        mounts: vec!["/srv".to_string()],
        ..Default::default()
    };
    let policy = config.assembly_policy();
    assert!(policy.allows("/srv"));
    assert!(!policy.allows("/"));
}
