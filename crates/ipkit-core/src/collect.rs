//! Release metadata collection.
//!
//! Reads `appinfo.json` and `package.json`, applies an optional build-number
//! override to the patch segment and reports the facts later pipeline steps
//! need. The descriptor is rewritten only after every check has passed.

use crate::descriptor::{AppInfo, PackageInfo};
use crate::error::Result;
use crate::text::{KeyValueLines, normalize_single_line};
use ipkit_schema::{AppVersion, VersionUpdate};
use std::path::Path;

/// Facts reported by [`collect_metadata`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseMetadata {
    /// Application id.
    pub app_id: String,
    /// Final version (after any suffix was applied).
    pub version: AppVersion,
    /// Package description, whitespace-normalized to a single line.
    pub description: String,
    /// Whether the descriptor on disk was rewritten.
    pub persisted: bool,
}

impl ReleaseMetadata {
    /// The `app_id`, `version` and `description` lines, in that order.
    ///
    /// # Errors
    ///
    /// Fails if the app id contains a line break.
    pub fn to_lines(&self) -> Result<KeyValueLines> {
        let mut lines = KeyValueLines::new();
        lines
            .push("app_id", self.app_id.as_str())?
            .push("version", self.version.to_string())?
            .push("description", self.description.as_str())?;
        Ok(lines)
    }
}

/// Collect release metadata, rewriting `appinfo_path` if `suffix` is non-blank.
///
/// # Errors
///
/// Fails without touching any file if either descriptor is unreadable or
/// malformed, if `id` or `version` is missing, if the version does not match
/// the grammar, or if the suffix is not 1-9 digits.
pub fn collect_metadata(
    appinfo_path: &Path,
    package_json_path: &Path,
    suffix: &str,
) -> Result<ReleaseMetadata> {
    let mut appinfo = AppInfo::load(appinfo_path)?;
    let package = PackageInfo::load(package_json_path)?;

    appinfo.require_keys(&["id", "version"])?;
    let update = VersionUpdate::compute(appinfo.version()?, suffix)?;

    let metadata = ReleaseMetadata {
        app_id: appinfo.id()?.to_string(),
        version: update.version,
        description: normalize_single_line(&package.description),
        persisted: update.persist,
    };
    metadata.to_lines()?;

    if update.persist {
        appinfo.set_version(update.version);
        appinfo.save()?;
    } else {
        tracing::debug!("no version suffix supplied; appinfo left unchanged");
    }

    Ok(metadata)
}
