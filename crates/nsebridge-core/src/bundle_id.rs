//! NSE bundle identifier composition

use crate::error::{PluginError, PluginResult};

/// Xcode target name of the notification service extension.
///
/// Doubles as the default bundle id suffix; keep in sync with the native
/// NSE target.
pub const NSE_TARGET_NAME: &str = "OneSignalNotificationServiceExtension";

/// Shape of the user-supplied bundle identifier override
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OverrideShape<'a> {
    /// No override (or an empty one): append the default suffix
    Default,
    /// Leading-dot form: a bare suffix appended to the main bundle id
    Suffix(&'a str),
    /// Full-form bundle identifier
    Full(&'a str),
}

impl<'a> OverrideShape<'a> {
    fn classify(override_id: Option<&'a str>) -> Self {
        match override_id {
            None | Some("") => OverrideShape::Default,
            Some(id) if id.starts_with('.') => OverrideShape::Suffix(id),
            Some(id) => OverrideShape::Full(id),
        }
    }
}

/// Compose the NSE bundle identifier from the main app's bundle identifier
/// and an optional user override.
///
/// Apple requires an app extension's bundle id to equal the host app's
/// bundle id plus exactly one additional dot-free segment. The override may
/// be a bare suffix with a leading dot (`".CustomNSE"`) or a full
/// identifier extending `primary` (`"com.example.app.CustomNSE"`); when
/// absent, the default suffix [`NSE_TARGET_NAME`] is appended.
///
/// `primary` is taken as-is; validating the main bundle id is the host
/// config's job, not this function's.
pub fn compose_nse_bundle_id(primary: &str, override_id: Option<&str>) -> PluginResult<String> {
    match OverrideShape::classify(override_id) {
        OverrideShape::Default => Ok(format!("{primary}.{NSE_TARGET_NAME}")),
        OverrideShape::Suffix(id) => {
            let suffix = &id[1..];
            check_segment(suffix, id, primary)?;
            Ok(format!("{primary}{id}"))
        }
        OverrideShape::Full(id) => {
            let Some(extension_part) = id
                .strip_prefix(primary)
                .and_then(|rest| rest.strip_prefix('.'))
            else {
                return Err(PluginError::PrefixMismatch {
                    override_id: id.to_string(),
                    primary: primary.to_string(),
                });
            };
            check_segment(extension_part, id, primary)?;
            Ok(id.to_string())
        }
    }
}

/// A derived id may add exactly one non-empty, dot-free segment.
fn check_segment(segment: &str, override_id: &str, primary: &str) -> PluginResult<()> {
    if segment.is_empty() {
        return Err(PluginError::EmptySuffix {
            override_id: override_id.to_string(),
            primary: primary.to_string(),
        });
    }
    if segment.contains('.') {
        return Err(PluginError::MultiSegmentSuffix {
            override_id: override_id.to_string(),
            primary: primary.to_string(),
        });
    }
    Ok(())
}


#[cfg(test)]
#[path = "bundle_id/bundle_id_parameterized_tests.rs"]
mod bundle_id_parameterized_tests;
