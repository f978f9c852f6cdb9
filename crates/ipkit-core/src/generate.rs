//! Manifest generation.
//!
//! Combines the application descriptor, a built IPK and the distribution
//! URLs into a [`Manifest`] and writes it to disk. All validation and hashing
//! happen before the output file is created.

use crate::descriptor::{AppIdentity, AppInfo};
use crate::digest::sha256_file;
use crate::error::{ReleaseError, Result};
use crate::json;
use crate::text::KeyValueLines;
use ipkit_schema::manifest::resolve_app_description;
use ipkit_schema::{AppVersion, IpkHash, Manifest, RootRequired, Sha256Digest};
use std::fs;
use std::path::{Component, Path};

/// Distribution fields supplied by the release pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistributionFields {
    /// Download location of the IPK.
    pub ipk_url: String,
    /// Icon location.
    pub icon_uri: String,
    /// Source repository location.
    pub source_url: String,
    /// Description override; blank means "use the descriptor's".
    pub app_description: String,
    /// Root requirement.
    pub root_required: RootRequired,
}

/// Result of [`generate_manifest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestReport {
    /// The document that was written.
    pub manifest: Manifest,
    /// Output path with forward slashes.
    pub manifest_path: String,
}

impl ManifestReport {
    /// The `id`, `version`, `sha256` and `manifest_path` lines.
    ///
    /// # Errors
    ///
    /// Fails if a value contains a line break.
    pub fn to_lines(&self) -> Result<KeyValueLines> {
        let mut lines = KeyValueLines::new();
        lines
            .push("id", self.manifest.id.as_str())?
            .push("version", self.manifest.version.as_str())?
            .push("sha256", self.manifest.ipk_hash.sha256.as_str())?
            .push("manifest_path", self.manifest_path.as_str())?;
        Ok(lines)
    }
}

/// Assemble a manifest from already validated parts.
pub fn build_manifest(
    identity: AppIdentity,
    sha256: Sha256Digest,
    fields: &DistributionFields,
) -> Manifest {
    let app_description =
        resolve_app_description(&fields.app_description, identity.app_description.as_deref());

    Manifest {
        id: identity.id,
        version: identity.version,
        app_type: identity.app_type,
        title: identity.title,
        icon_uri: fields.icon_uri.clone(),
        source_url: fields.source_url.clone(),
        root_required: fields.root_required,
        ipk_url: fields.ipk_url.clone(),
        ipk_hash: IpkHash { sha256 },
        app_description,
    }
}

/// Render a path with `/` separators, dropping `.` components and repeated
/// separators (`./out//manifest.json` becomes `out/manifest.json`). `..` is
/// kept since resolving it would need the filesystem.
fn to_forward_slashes(path: &Path) -> String {
    let mut out = String::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::Prefix(prefix) => {
                out.push_str(&prefix.as_os_str().to_string_lossy().replace('\\', "/"));
            }
            Component::RootDir => out.push('/'),
            Component::ParentDir | Component::Normal(_) => {
                if !out.is_empty() && !out.ends_with('/') {
                    out.push('/');
                }
                out.push_str(&component.as_os_str().to_string_lossy());
            }
        }
    }

    if out.is_empty() {
        out.push('.');
    }
    out
}

/// Generate the manifest for `ipk_path` and write it to `output_path`.
///
/// # Errors
///
/// Fails, without creating the output, if the descriptor is unreadable,
/// malformed or missing any of `id`, `version`, `type`, `title`, or if the
/// IPK cannot be read. Directory creation and write failures are reported
/// as [`ReleaseError::Write`].
pub fn generate_manifest(
    appinfo_path: &Path,
    ipk_path: &Path,
    output_path: &Path,
    fields: &DistributionFields,
) -> Result<ManifestReport> {
    let identity = AppInfo::load(appinfo_path)?.identity()?;
    if !AppVersion::is_valid(&identity.version) {
        tracing::warn!(
            version = %identity.version,
            "appinfo version does not match MAJOR.MINOR.PATCH; copying it as-is"
        );
    }

    let sha256 = sha256_file(ipk_path)?;
    let report = ManifestReport {
        manifest: build_manifest(identity, sha256, fields),
        manifest_path: to_forward_slashes(output_path),
    };
    report.to_lines()?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ReleaseError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    json::write_pretty(output_path, &report.manifest, json::MANIFEST_INDENT)?;
    tracing::info!(path = %output_path.display(), "wrote manifest");

    Ok(report)
}
