//! Managed-credentials `extra` document assembly

use nsebridge_core::{NSE_TARGET_NAME, PluginProps, PluginResult, compose_nse_bundle_id};
use serde_json::{Map, Value, json};

/// Build the app config `extra` document with the NSE app-extension entry
/// appended under `eas.build.experimental.ios.appExtensions`.
///
/// `extra` is the host app's existing `extra` document, if any; sibling keys
/// at every level are preserved and pre-existing `appExtensions` entries are
/// kept. The NSE bundle identifier is derived from `primary_bundle_id` and
/// the `iosNSEBundleIdentifier` prop, and the app-group entitlement defaults
/// to `group.<primary_bundle_id>.onesignal`.
pub fn managed_credentials_extra(
    extra: Option<&Value>,
    primary_bundle_id: &str,
    props: Option<&PluginProps>,
) -> PluginResult<Value> {
    let nse_bundle_id = compose_nse_bundle_id(
        primary_bundle_id,
        props.and_then(|p| p.ios_nse_bundle_identifier.as_deref()),
    )?;
    tracing::debug!(bundle_id = %nse_bundle_id, "derived NSE bundle identifier");

    let app_group = props
        .and_then(|p| p.app_group_name.clone())
        .unwrap_or_else(|| format!("group.{primary_bundle_id}.onesignal"));

    let extension = json!({
        // keep in sync with native changes in the NSE target
        "targetName": NSE_TARGET_NAME,
        "bundleIdentifier": nse_bundle_id,
        "entitlements": {
            "com.apple.security.application-groups": [app_group],
        },
    });

    let mut root = match extra {
        Some(Value::Object(map)) => map.clone(),
        _ => Map::new(),
    };

    let ios = descend(&mut root, &["eas", "build", "experimental", "ios"]);
    let extensions = ios
        .entry("appExtensions".to_string())
        .or_insert_with(|| Value::Array(Vec::new()));
    if !extensions.is_array() {
        *extensions = Value::Array(Vec::new());
    }
    #[allow(clippy::unwrap_used)] // Safe: the entry was just made an array above
    extensions.as_array_mut().unwrap().push(extension);

    Ok(Value::Object(root))
}

/// Descend through nested objects, creating missing levels and replacing
/// non-object values, without touching sibling keys.
fn descend<'a>(map: &'a mut Map<String, Value>, path: &[&str]) -> &'a mut Map<String, Value> {
    let mut current = map;
    for key in path {
        let slot = current
            .entry((*key).to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        #[allow(clippy::unwrap_used)] // Safe: the slot was just made an object above
        {
            current = slot.as_object_mut().unwrap();
        }
    }
    current
}
