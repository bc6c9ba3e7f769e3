use std::fs;
use std::path::{Path, PathBuf};

use sha1::{Digest, Sha1};

use crate::ports::outbound::ContentAccessor;
use crate::shared::error::SbomError;
use crate::shared::Result;

/// FsContentAccessor adapter hashing installed files under the product
/// output directory
///
/// Symlinks are hashed over their target text rather than the pointed-to
/// content, so dangling links in the image still checksum.
pub struct FsContentAccessor {
    product_out_dir: PathBuf,
}

impl FsContentAccessor {
    pub fn new(product_out_dir: impl Into<PathBuf>) -> Self {
        Self {
            product_out_dir: product_out_dir.into(),
        }
    }

    fn installed_path(&self, installed_file: &str) -> PathBuf {
        self.product_out_dir.join(installed_file)
    }
}

impl ContentAccessor for FsContentAccessor {
    fn exists(&self, installed_file: &str) -> bool {
        let path = self.installed_path(installed_file);
        path.is_file() || path.is_symlink()
    }

    fn checksum(&self, installed_file: &str) -> Result<String> {
        let path = self.installed_path(installed_file);
        let digest = if path.is_symlink() {
            let target = fs::read_link(&path).map_err(|e| checksum_error(&path, e))?;
            sha1_hex(target.to_string_lossy().as_bytes())
        } else {
            let bytes = fs::read(&path).map_err(|e| checksum_error(&path, e))?;
            sha1_hex(&bytes)
        };
        Ok(format!("SHA1: {}", digest))
    }
}

fn checksum_error(path: &Path, e: std::io::Error) -> anyhow::Error {
    SbomError::Checksum {
        path: path.to_path_buf(),
        details: e.to_string(),
    }
    .into()
}

fn sha1_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
