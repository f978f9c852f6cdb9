//! Collect command

use anyhow::Result;
use std::path::Path;

/// Print release metadata, rewriting appinfo.json when `suffix` is non-blank.
pub fn collect(appinfo: &Path, package_json: &Path, suffix: &str) -> Result<()> {
    let metadata = ipkit_core::collect_metadata(appinfo, package_json, suffix)?;
    let lines = metadata.to_lines()?;
    print!("{lines}");
    Ok(())
}
