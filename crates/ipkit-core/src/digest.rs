//! Streamed SHA-256 of package artifacts.

use crate::error::{ReleaseError, Result};
use ipkit_schema::Sha256Digest;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Read size per hasher update. Caps memory use regardless of artifact size.
const HASH_CHUNK_SIZE: usize = 1024 * 1024;

/// Compute the SHA256 of a file (streaming).
///
/// # Errors
///
/// Returns [`ReleaseError::Read`] if the file cannot be opened or read.
pub fn sha256_file(path: &Path) -> Result<Sha256Digest> {
    let read_error = |source: io::Error| ReleaseError::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    let digest = sha256_reader(file).map_err(read_error)?;
    tracing::debug!(path = %path.display(), sha256 = %digest, "hashed artifact");
    Ok(digest)
}

/// SHA256 of everything `reader` yields, [`HASH_CHUNK_SIZE`] bytes at a time.
/// Interrupted reads are retried.
fn sha256_reader<R: Read>(mut reader: R) -> io::Result<Sha256Digest> {
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; HASH_CHUNK_SIZE];

    loop {
        let bytes_read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(Sha256Digest::from_bytes(hasher.finalize().into()))
}
