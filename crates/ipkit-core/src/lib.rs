//! Core library for ipkit.
//!
//! Loads webOS application and package descriptors, hashes IPK artifacts,
//! and implements the two release steps:
//!
//! - [`collect::collect_metadata`]: version check, optional patch override
//!   persisted back to `appinfo.json`, and the `app_id`/`version`/`description`
//!   facts.
//! - [`generate::generate_manifest`]: the homebrew-style distribution manifest.
//!
//! Everything here is synchronous; each operation validates fully before it
//! writes anything.

pub mod collect;
pub mod descriptor;
pub mod digest;
pub mod error;
pub mod generate;
pub mod json;
pub mod text;

pub use collect::{ReleaseMetadata, collect_metadata};
pub use descriptor::{AppIdentity, AppInfo, PackageInfo};
pub use digest::sha256_file;
pub use error::{ReleaseError, Result};
pub use generate::{DistributionFields, ManifestReport, generate_manifest};
pub use text::KeyValueLines;
