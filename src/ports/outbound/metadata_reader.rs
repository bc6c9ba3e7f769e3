use std::path::Path;

use crate::sbom::domain::MetadataDescriptor;
use crate::shared::Result;

/// MetadataReader port for per-directory supply-chain descriptors
///
/// Abstracts the METADATA files scattered through the source tree. The
/// resolver walks directories with `has_descriptor` and parses at most once
/// per directory through `read_descriptor`.
pub trait MetadataReader {
    /// Whether the given source directory carries a metadata descriptor
    fn has_descriptor(&self, dir: &Path) -> bool;

    /// Parses the descriptor of the given source directory
    ///
    /// # Errors
    /// Returns an error if the descriptor file is absent or is not valid
    /// structured text. A present-but-unparseable descriptor is fatal to the
    /// run.
    fn read_descriptor(&self, dir: &Path) -> Result<MetadataDescriptor>;
}
