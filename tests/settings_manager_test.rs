//! 设置管理器测试
//!
//! 测试设置文件的加载、保存和错误处理

use std::fs;

use aprs_console::app::settings::manager::{
    AppSettings, SettingsManager,
};
use tempfile::TempDir;

#[test]
fn test_settings_manager_creation() {
    // 测试设置管理器创建
    let result = SettingsManager::new();
    assert!(
        result.is_ok(),
        "Settings manager creation should succeed"
    );
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    // load 应能处理不存在的设置文件
    if let Ok(mut manager) = SettingsManager::new() {
        let load_result = manager.load();
        assert!(
            load_result.is_ok(),
            "Loading should succeed with default settings"
        );
    }
}

#[test]
fn test_default_settings_values() {
    let settings = AppSettings::default();

    assert_eq!(
        settings.server_url,
        "http://127.0.0.1:5000"
    );
    assert!(settings.request_timeout_secs > 0);
}

#[test]
fn test_settings_serialization() {
    // 测试设置序列化
    let settings = AppSettings::default();
    let toml_str = toml::to_string_pretty(&settings);
    assert!(
        toml_str.is_ok(),
        "Settings serialization should work"
    );

    // 测试反序列化
    if let Ok(serialized) = toml_str {
        let deserialized: Result<AppSettings, _> =
            toml::from_str(&serialized);
        assert!(
            deserialized.is_ok(),
            "Settings deserialization should work"
        );
    }
}

#[test]
fn test_settings_file_round_trip() {
    // 写入临时目录再读回，字段保持不变
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("console.toml");

    let settings = AppSettings {
        server_url: "http://radio.local:8000"
            .to_string(),
        request_timeout_secs: 5,
    };

    fs::write(
        &path,
        toml::to_string_pretty(&settings).unwrap(),
    )
    .unwrap();

    let loaded: AppSettings = toml::from_str(
        &fs::read_to_string(&path).unwrap(),
    )
    .unwrap();

    assert_eq!(
        loaded.server_url,
        "http://radio.local:8000"
    );
    assert_eq!(loaded.request_timeout_secs, 5);
}

#[test]
fn test_invalid_settings_handling() {
    // 测试无效TOML设置的处理
    let invalid_toml = r#"
        server_url = "http://127.0.0.1:5000"
        request_timeout_secs =
    "#;

    let result: Result<AppSettings, _> =
        toml::from_str(invalid_toml);
    assert!(
        result.is_err(),
        "Invalid TOML should fail to parse"
    );
}
