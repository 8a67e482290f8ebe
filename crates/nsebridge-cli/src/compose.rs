//! `nsebridge compose` - Derive the NSE bundle identifier

use anyhow::Result;
use nsebridge_core::compose_nse_bundle_id;

/// Compose command implementation
pub fn run(bundle_id: &str, identifier: Option<&str>) -> Result<()> {
    let nse_bundle_id = compose_nse_bundle_id(bundle_id, identifier)?;

    println!("{nse_bundle_id}");

    Ok(())
}
