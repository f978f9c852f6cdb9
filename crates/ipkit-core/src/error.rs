//! Error type shared by every core operation.

use ipkit_schema::SchemaError;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = ReleaseError> = std::result::Result<T, E>;

/// Everything that can stop a collector or generator run.
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// A file could not be opened or read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A file or directory could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// File or directory being written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A file is not valid JSON for the expected shape.
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        /// File being parsed.
        path: PathBuf,
        /// Underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be encoded as JSON.
    #[error("Failed to encode {}: {source}", path.display())]
    Encode {
        /// Destination of the encoded document.
        path: PathBuf,
        /// Underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },

    /// A descriptor's top-level value is not a JSON object.
    #[error("{} must contain a JSON object", path.display())]
    NotAnObject {
        /// Offending descriptor.
        path: PathBuf,
    },

    /// Required keys are absent; every missing key is listed.
    #[error("Missing keys in {}: {}", path.display(), keys.join(", "))]
    MissingKeys {
        /// Offending descriptor.
        path: PathBuf,
        /// Missing keys, in lookup order.
        keys: Vec<&'static str>,
    },

    /// A key is present but does not hold a string.
    #[error("Key '{key}' in {} must be a string", path.display())]
    NotAString {
        /// Offending descriptor.
        path: PathBuf,
        /// Key with the wrong type.
        key: &'static str,
    },

    /// A value meant for `key=value` output contains a line break.
    #[error("Value for '{key}' must fit on a single line: {value:?}")]
    MultilineValue {
        /// Output key.
        key: &'static str,
        /// Rejected value.
        value: String,
    },

    /// A version, suffix or root requirement failed validation.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}
