//! `nsebridge check` - Validate a plugin props file

use anyhow::{Context, Result};
use nsebridge_core::{PluginProps, validate_plugin_props};
use serde_json::Value;

/// Read a props JSON file into a top-level object value
pub fn load_props(path: &str) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read props file: {path}"))?;

    let value: Value =
        serde_json::from_str(&content).with_context(|| format!("Failed to parse {path}"))?;

    if !value.is_object() {
        anyhow::bail!("Props file must contain a JSON object: {path}");
    }

    Ok(value)
}

/// Check command implementation
pub fn run(props_path: Option<String>) -> Result<()> {
    let path = props_path.unwrap_or_else(|| "onesignal.json".to_string());

    println!("Checking plugin props: {}", path);

    let value = load_props(&path)?;
    #[allow(clippy::unwrap_used)] // Safe: load_props rejects non-objects
    let bag = value.as_object().unwrap();

    validate_plugin_props(bag)?;
    let props = PluginProps::from_value(&value)?;

    println!("✓ Mode: {}", props.mode);
    if let Some(team) = &props.dev_team {
        println!("✓ Dev team: {}", team);
    }
    if let Some(identifier) = &props.ios_nse_bundle_identifier {
        println!("✓ NSE bundle identifier: {}", identifier);
    }
    println!("\nProps are valid!");

    Ok(())
}
