//! Manifest command

use anyhow::Result;
use ipkit_core::DistributionFields;
use std::path::Path;

/// Generate the manifest and print its summary lines.
pub fn manifest(
    appinfo: &Path,
    ipk: &Path,
    output: &Path,
    fields: &DistributionFields,
) -> Result<()> {
    let report = ipkit_core::generate_manifest(appinfo, ipk, output, fields)?;
    let lines = report.to_lines()?;
    print!("{lines}");
    Ok(())
}
