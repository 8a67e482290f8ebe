//! Typed plugin properties and the recognized-key schema

use serde::{Deserialize, Serialize};

use crate::error::PluginResult;

/// Expected value type for a recognized plugin property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropType {
    /// Must be present and hold a JSON string
    RequiredString,
    /// May be absent; a truthy value must be a JSON string
    OptionalString,
    /// May be absent; a truthy value must be a JSON array
    Array,
}

/// Recognized plugin properties, in check order.
///
/// Adding a property is a one-line edit here; the validator iterates this
/// table uniformly.
pub const PLUGIN_PROP_SCHEMA: &[(&str, PropType)] = &[
    ("mode", PropType::RequiredString),
    ("devTeam", PropType::OptionalString),
    ("iPhoneDeploymentTarget", PropType::OptionalString),
    ("smallIcons", PropType::Array),
    ("smallIconAccentColor", PropType::OptionalString),
    ("largeIcons", PropType::Array),
    ("iosNSEFilePath", PropType::OptionalString),
    ("appGroupName", PropType::OptionalString),
    ("iosNSEBundleIdentifier", PropType::OptionalString),
];

/// APNs environment used for the aps-environment entitlement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Development,
    Production,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Development => write!(f, "development"),
            Mode::Production => write!(f, "production"),
        }
    }
}

/// Plugin properties set by the user in their app config file (e.g. app.json)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginProps {
    /// APNs environment entitlement
    pub mode: Mode,

    /// Apple Team ID, e.g. "91SW8A37CR"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_team: Option<String>,

    /// IPHONEOS_DEPLOYMENT_TARGET for the NSE target. Should match the
    /// value in the app's Podfile, e.g. "12.0".
    #[serde(
        default,
        rename = "iPhoneDeploymentTarget",
        skip_serializing_if = "Option::is_none"
    )]
    pub iphone_deployment_target: Option<String>,

    /// Small notification icons for Android; scaled to 96x96
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small_icons: Option<Vec<String>>,

    /// Accent color for Android notification icons, e.g. "#FF0000"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small_icon_accent_color: Option<String>,

    /// Large notification icons for Android; scaled to 256x256
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large_icons: Option<Vec<String>>,

    /// Local path to a custom NSE source file replacing the bundled one
    #[serde(
        default,
        rename = "iosNSEFilePath",
        skip_serializing_if = "Option::is_none"
    )]
    pub ios_nse_file_path: Option<String>,

    /// App group shared between the app and the NSE
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_group_name: Option<String>,

    /// Custom NSE bundle identifier, either a ".Suffix" appended to the
    /// main bundle id or a full identifier extending it by one segment
    #[serde(
        default,
        rename = "iosNSEBundleIdentifier",
        skip_serializing_if = "Option::is_none"
    )]
    pub ios_nse_bundle_identifier: Option<String>,
}

impl PluginProps {
    /// Deserialize props from a JSON value.
    ///
    /// Intended to run after [`crate::validate_plugin_props`] has gated the
    /// raw bag. Falsy placeholders other than `null` (`0`, `false`) pass
    /// validation but have no typed representation and fail here.
    pub fn from_value(value: &serde_json::Value) -> PluginResult<Self> {
        Ok(serde_json::from_value(value.clone())?)
    }
}

#[cfg(test)]
#[path = "props/props_tests.rs"]
mod props_tests;
