//! JSON file helpers.
//!
//! Descriptors are rewritten with a 4-space indent and manifests with a
//! 2-space indent; both always end with a newline.
//!
//! Output is UTF-8 and non-ASCII text is written as-is, never as `\uXXXX`
//! escapes. Numbers keep their source text (`arbitrary_precision`), so a
//! rewrite never rounds a large integer or reformats a float.

use crate::error::{ReleaseError, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Indent used when rewriting an application descriptor.
pub const DESCRIPTOR_INDENT: &[u8] = b"    ";

/// Indent used when writing a manifest document.
pub const MANIFEST_INDENT: &[u8] = b"  ";

/// Read and deserialize a JSON file.
///
/// # Errors
///
/// Returns [`ReleaseError::Read`] if the file cannot be read and
/// [`ReleaseError::Parse`] if it is not valid JSON for `T`.
pub fn read<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|source| ReleaseError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ReleaseError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a JSON file whose top-level value must be an object.
///
/// # Errors
///
/// Same as [`read`], plus [`ReleaseError::NotAnObject`] for arrays, scalars
/// and `null`.
pub fn read_object(path: &Path) -> Result<Map<String, Value>> {
    match read::<Value>(path)? {
        Value::Object(map) => Ok(map),
        _ => Err(ReleaseError::NotAnObject {
            path: path.to_path_buf(),
        }),
    }
}

/// Encode `value` as pretty JSON with the given indent and a trailing newline.
/// `path` is only used for the error message.
fn to_pretty_bytes<T: Serialize>(path: &Path, value: &T, indent: &[u8]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent));
    value
        .serialize(&mut serializer)
        .map_err(|source| ReleaseError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    buf.push(b'\n');
    Ok(buf)
}

/// Write `value` to `path` as pretty JSON, replacing any existing file.
///
/// The whole document is encoded before the file is opened, so an encoding
/// failure leaves the destination untouched.
///
/// # Errors
///
/// Returns [`ReleaseError::Encode`] or [`ReleaseError::Write`].
pub fn write_pretty<T: Serialize>(path: &Path, value: &T, indent: &[u8]) -> Result<()> {
    let bytes = to_pretty_bytes(path, value, indent)?;
    fs::write(path, bytes).map_err(|source| ReleaseError::Write {
        path: path.to_path_buf(),
        source,
    })
}
