//! nsebridge-core - Plugin property validation and NSE bundle id composition
//!
//! This crate provides the build-time configuration core for embedding a
//! OneSignal Notification Service Extension (NSE) into a mobile app:
//! - [`validate_plugin_props`] gates a user-supplied property bag
//! - [`compose_nse_bundle_id`] derives the NSE bundle identifier
//! - [`PluginProps`] is the typed view of a validated property bag
//! - [`PluginError`] for error handling

mod bundle_id;
mod error;
mod props;
mod validate;

pub use bundle_id::{NSE_TARGET_NAME, compose_nse_bundle_id};
pub use error::{PluginError, PluginResult};
pub use props::{Mode, PLUGIN_PROP_SCHEMA, PluginProps, PropType};
pub use validate::validate_plugin_props;
