#![allow(non_snake_case)]

use test_case::test_case;

use super::*;

// ============================================================================
// Parameterized valid overrides
// ============================================================================

#[test_case(None, "com.example.app.OneSignalNotificationServiceExtension")]
#[test_case(Some(""), "com.example.app.OneSignalNotificationServiceExtension")]
#[test_case(Some(".CustomNSE"), "com.example.app.CustomNSE")]
#[test_case(Some(".nse"), "com.example.app.nse")]
#[test_case(Some("com.example.app.CustomNSE"), "com.example.app.CustomNSE")]
#[test_case(Some("com.example.app.NotificationService"), "com.example.app.NotificationService")]
fn compose_nse_bundle_id___valid_override___composes(override_id: Option<&str>, expected: &str) {
    let id = compose_nse_bundle_id("com.example.app", override_id).unwrap();

    assert_eq!(id, expected);
}

// ============================================================================
// Parameterized rejected overrides
// ============================================================================

#[test_case(Some(".custom.nse"))]
#[test_case(Some(".a.b.c"))]
#[test_case(Some("com.example.app.custom.nse"))]
fn compose_nse_bundle_id___multi_segment_override___fails(override_id: Option<&str>) {
    let err = compose_nse_bundle_id("com.example.app", override_id).unwrap_err();

    assert!(
        matches!(err, PluginError::MultiSegmentSuffix { .. }),
        "{override_id:?} should be a multi-segment failure, got {err:?}"
    );
}

#[test_case(Some("com.other.app.CustomNSE"))]
#[test_case(Some("org.example.app.CustomNSE"))]
#[test_case(Some("com.example.ap.CustomNSE"))]
#[test_case(Some("com.example.app"))]
fn compose_nse_bundle_id___non_extending_override___fails(override_id: Option<&str>) {
    let err = compose_nse_bundle_id("com.example.app", override_id).unwrap_err();

    assert!(
        matches!(err, PluginError::PrefixMismatch { .. }),
        "{override_id:?} should be a prefix mismatch, got {err:?}"
    );
}

#[test_case(Some("."))]
#[test_case(Some("com.example.app."))]
fn compose_nse_bundle_id___empty_segment_override___fails(override_id: Option<&str>) {
    let err = compose_nse_bundle_id("com.example.app", override_id).unwrap_err();

    assert!(
        matches!(err, PluginError::EmptySuffix { .. }),
        "{override_id:?} should be an empty-suffix failure, got {err:?}"
    );
}
