use crate::shared::Result;

/// ContentAccessor port for installed-file content
///
/// Abstracts access to the files under the product output directory for
/// existence checks and content checksumming.
pub trait ContentAccessor {
    /// Whether the installed path exists as a regular file or symlink
    fn exists(&self, installed_file: &str) -> bool;

    /// Content checksum in `SHA1: <hex>` form
    ///
    /// Symbolic links are hashed over their target text, not the pointed-to
    /// content, so dangling links still checksum deterministically.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn checksum(&self, installed_file: &str) -> Result<String>;
}
