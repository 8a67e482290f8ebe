//! `nsebridge credentials` - Print the EAS managed-credentials `extra` document

use anyhow::{Context, Result};
use nsebridge_core::{PluginProps, validate_plugin_props};
use nsebridge_eas::managed_credentials_extra;
use serde_json::Value;

use crate::check::load_props;

/// Credentials command implementation
pub fn run(bundle_id: &str, props_path: Option<String>, extra_path: Option<String>) -> Result<()> {
    let props = match props_path {
        Some(path) => {
            let value = load_props(&path)?;
            #[allow(clippy::unwrap_used)] // Safe: load_props rejects non-objects
            let bag = value.as_object().unwrap();
            validate_plugin_props(bag)?;
            Some(PluginProps::from_value(&value)?)
        }
        None => None,
    };

    let extra = match extra_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read extra file: {path}"))?;
            let value: Value = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse {path}"))?;
            Some(value)
        }
        None => None,
    };

    let merged = managed_credentials_extra(extra.as_ref(), bundle_id, props.as_ref())?;

    println!("{}", serde_json::to_string_pretty(&merged)?);

    Ok(())
}
