//! Whole-package verification code over member file checksums.

use sha1::{Digest, Sha1};

use crate::sbom::domain::File;

/// Derive the package verification code: sort the member files' checksum
/// strings lexicographically, concatenate with no delimiter, and SHA-1 the
/// result. Sorting first makes the code a set-of-checksums digest, sensitive
/// to any file's content but independent of discovery order.
pub fn verification_code(files: &[File]) -> String {
    let mut checksums: Vec<&str> = files.iter().map(|f| f.checksum.as_str()).collect();
    checksums.sort_unstable();

    let mut hasher = Sha1::new();
    for checksum in checksums {
        hasher.update(checksum.as_bytes());
    }
    hex::encode(hasher.finalize())
}
