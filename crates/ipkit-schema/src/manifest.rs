//! Distribution manifest document.
//!
//! A manifest is the catalog entry a homebrew-style webOS app store reads to
//! find and check a package. Field order is part of the output contract
//! (reproducible diffs between releases), so it follows struct declaration
//! order and must not be reshuffled.

use crate::{RootRequired, Sha256Digest};
use serde::Serialize;

/// One manifest entry, serialized in the order the store expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// Stable application identifier (`com.example.app`).
    pub id: String,
    /// Application version, copied from the descriptor.
    pub version: String,
    /// Application type (`web`, `native`, ...).
    #[serde(rename = "type")]
    pub app_type: String,
    /// Human-readable title.
    pub title: String,
    /// Icon location.
    pub icon_uri: String,
    /// Source repository location.
    pub source_url: String,
    /// Root requirement tri-state.
    pub root_required: RootRequired,
    /// Where the IPK can be downloaded.
    pub ipk_url: String,
    /// Integrity hashes of the IPK.
    pub ipk_hash: IpkHash,
    /// Optional long description; never serialized as an empty string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_description: Option<String>,
}

/// Hashes of the package artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IpkHash {
    /// SHA-256 of the IPK file.
    pub sha256: Sha256Digest,
}

/// Pick the manifest description.
///
/// The explicit override wins when it is non-blank, then the descriptor's
/// own description; both are trimmed. `None` means the field is omitted.
///
/// ```
/// use ipkit_schema::manifest::resolve_app_description;
///
/// assert_eq!(resolve_app_description(" ", Some(" Hello ")), Some("Hello".to_string()));
/// assert_eq!(resolve_app_description("Override", Some("Hello")), Some("Override".to_string()));
/// assert_eq!(resolve_app_description("", Some("")), None);
/// ```
pub fn resolve_app_description(override_text: &str, descriptor: Option<&str>) -> Option<String> {
    [Some(override_text), descriptor]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}
