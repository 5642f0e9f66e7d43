use shellmenu_core::{ActivationTrigger, ContentConfig, MenuError, MenuVariant, SubmenuOnClear};
use std::fs;

#[test]
fn test_config_loads_from_file() {
    let test_dir = std::env::temp_dir().join("shellmenu_config_test");
    fs::create_dir_all(&test_dir).unwrap();
    let path = test_dir.join("menu.toml");
    fs::write(
        &path,
        r#"
        variant = "popup"
        activation = "release"
        submenu_on_clear = "collapse"
        grab_delay_ms = 250
        "#,
    )
    .unwrap();

    let config = ContentConfig::from_file(&path).unwrap();
    assert_eq!(config.variant, MenuVariant::Popup);
    assert_eq!(config.activation, ActivationTrigger::Release);
    assert_eq!(config.submenu_on_clear, SubmenuOnClear::Collapse);
    assert_eq!(config.grab_delay_ms, 250);
    assert!(config.show_submenu_indicators);

    fs::remove_dir_all(&test_dir).unwrap();
}

#[test]
fn test_missing_config_file() {
    let result = ContentConfig::from_file("/nonexistent/shellmenu/menu.toml");
    assert!(matches!(result, Err(MenuError::ConfigFileNotFound { .. })));
}

#[test]
fn test_malformed_config_file() {
    let test_dir = std::env::temp_dir().join("shellmenu_config_bad_test");
    fs::create_dir_all(&test_dir).unwrap();
    let path = test_dir.join("menu.toml");
    fs::write(&path, "variant = \"taskbar\"").unwrap();

    let result = ContentConfig::from_file(&path);
    assert!(matches!(result, Err(MenuError::ConfigParse { .. })));

    fs::remove_dir_all(&test_dir).unwrap();
}
