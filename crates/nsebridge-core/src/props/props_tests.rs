#![allow(non_snake_case)]

use serde_json::json;

use super::*;
use crate::error::PluginError;

#[test]
fn PluginProps___from_value___parses_minimal_props() {
    let props = PluginProps::from_value(&json!({ "mode": "development" })).unwrap();

    assert_eq!(props.mode, Mode::Development);
    assert!(props.dev_team.is_none());
    assert!(props.ios_nse_bundle_identifier.is_none());
}

#[test]
fn PluginProps___from_value___parses_full_props() {
    let props = PluginProps::from_value(&json!({
        "mode": "production",
        "devTeam": "91SW8A37CR",
        "iPhoneDeploymentTarget": "12.0",
        "smallIcons": ["./assets/small.png"],
        "smallIconAccentColor": "#FF0000",
        "largeIcons": ["./assets/large.png"],
        "iosNSEFilePath": "./nse/NotificationService.m",
        "appGroupName": "group.com.example.app.custom",
        "iosNSEBundleIdentifier": ".CustomNSE",
    }))
    .unwrap();

    assert_eq!(props.mode, Mode::Production);
    assert_eq!(props.dev_team.as_deref(), Some("91SW8A37CR"));
    assert_eq!(props.iphone_deployment_target.as_deref(), Some("12.0"));
    assert_eq!(
        props.small_icons,
        Some(vec!["./assets/small.png".to_string()])
    );
    assert_eq!(props.small_icon_accent_color.as_deref(), Some("#FF0000"));
    assert_eq!(
        props.ios_nse_file_path.as_deref(),
        Some("./nse/NotificationService.m")
    );
    assert_eq!(
        props.app_group_name.as_deref(),
        Some("group.com.example.app.custom")
    );
    assert_eq!(props.ios_nse_bundle_identifier.as_deref(), Some(".CustomNSE"));
}

#[test]
fn PluginProps___from_value___rejects_invalid_mode() {
    let result = PluginProps::from_value(&json!({ "mode": "staging" }));

    assert!(matches!(result, Err(PluginError::Deserialize(_))));
}

#[test]
fn PluginProps___from_value___rejects_missing_mode() {
    let result = PluginProps::from_value(&json!({ "devTeam": "91SW8A37CR" }));

    assert!(result.is_err());
}

#[test]
fn PluginProps___serialize___uses_config_file_key_names() {
    let props = PluginProps::from_value(&json!({
        "mode": "development",
        "iPhoneDeploymentTarget": "12.0",
        "iosNSEBundleIdentifier": ".CustomNSE",
    }))
    .unwrap();

    let value = serde_json::to_value(&props).unwrap();

    assert_eq!(value["mode"], "development");
    assert_eq!(value["iPhoneDeploymentTarget"], "12.0");
    assert_eq!(value["iosNSEBundleIdentifier"], ".CustomNSE");
    assert!(value.get("devTeam").is_none());
}

#[test]
fn Mode___display___matches_config_values() {
    assert_eq!(Mode::Development.to_string(), "development");
    assert_eq!(Mode::Production.to_string(), "production");
}

#[test]
fn PLUGIN_PROP_SCHEMA___covers_all_nine_properties() {
    assert_eq!(PLUGIN_PROP_SCHEMA.len(), 9);
    assert!(
        PLUGIN_PROP_SCHEMA
            .iter()
            .any(|(key, prop_type)| *key == "mode" && *prop_type == PropType::RequiredString)
    );
}
