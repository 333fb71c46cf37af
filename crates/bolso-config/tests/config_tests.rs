use std::path::PathBuf;

use bolso_config::{Config, ConfigManager, MirrorSettings};
use tempfile::TempDir;

#[test]
fn load_returns_defaults_when_no_file_exists() {
    let temp = TempDir::new().expect("create temp dir");
    let manager = ConfigManager::new(temp.path().join("config.json"));
    let config = manager.load().expect("load defaults");
    assert_eq!(config, Config::default());
    assert_eq!(config.locale, "pt-BR");
    assert_eq!(config.currency, "BRL");
}

#[test]
fn save_and_load_round_trip() {
    let temp = TempDir::new().expect("create temp dir");
    let manager = ConfigManager::new(temp.path().join("nested").join("config.json"));

    let mut config = Config::default();
    config.data_root = Some(PathBuf::from("/tmp/bolso-data"));
    config.mirror = Some(MirrorSettings {
        url: "https://mirror.example".into(),
        api_key: "key".into(),
    });
    manager.save(&config).expect("save config");

    let loaded = manager.load().expect("load config");
    assert_eq!(loaded, config);
}

#[test]
fn save_leaves_no_staging_file_behind() {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("config.json");
    let manager = ConfigManager::new(path.clone());
    manager.save(&Config::default()).expect("save config");

    assert!(path.exists());
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn explicit_roots_override_platform_defaults() {
    let mut config = Config::default();
    config.data_root = Some(PathBuf::from("/custom/data"));
    config.report_root = Some(PathBuf::from("/custom/reports"));
    assert_eq!(config.resolve_data_root(), PathBuf::from("/custom/data"));
    assert_eq!(config.resolve_report_root(), PathBuf::from("/custom/reports"));
}
