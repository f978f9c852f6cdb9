//! Shared types for ipkit.
//!
//! Everything in this crate is pure data: the application version grammar,
//! the patch-suffix override, the root-requirement tri-state, the SHA-256
//! digest newtype and the distribution manifest document. Filesystem access
//! lives in `ipkit-core`.

pub mod error;
pub mod hash;
pub mod manifest;
pub mod root;
pub mod version;

// Re-exports
pub use error::SchemaError;
pub use hash::Sha256Digest;
pub use manifest::{IpkHash, Manifest};
pub use root::RootRequired;
pub use version::{AppVersion, PatchSuffix, VersionUpdate};

/// Keys every application descriptor must carry before a manifest can be
/// generated from it, in manifest order.
pub const REQUIRED_APPINFO_KEYS: [&str; 4] = ["id", "version", "type", "title"];
