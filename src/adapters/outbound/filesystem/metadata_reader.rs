use std::fs;
use std::path::{Path, PathBuf};

use crate::ports::outbound::MetadataReader;
use crate::sbom::domain::MetadataDescriptor;
use crate::shared::error::SbomError;
use crate::shared::Result;

const METADATA_FILENAME: &str = "METADATA";

/// TomlMetadataReader adapter parsing METADATA descriptor files
///
/// Directories handed to this adapter are source-tree relative; they are
/// joined onto the configured source root. A present-but-unparseable
/// descriptor is a fatal error, a missing one is simply absent.
pub struct TomlMetadataReader {
    source_root: PathBuf,
}

impl TomlMetadataReader {
    pub fn new(source_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
        }
    }

    fn descriptor_path(&self, dir: &Path) -> PathBuf {
        self.source_root.join(dir).join(METADATA_FILENAME)
    }
}

impl MetadataReader for TomlMetadataReader {
    fn has_descriptor(&self, dir: &Path) -> bool {
        self.descriptor_path(dir).is_file()
    }

    fn read_descriptor(&self, dir: &Path) -> Result<MetadataDescriptor> {
        let path = self.descriptor_path(dir);
        let content = fs::read_to_string(&path).map_err(|e| SbomError::DescriptorParse {
            path: path.clone(),
            details: e.to_string(),
        })?;
        let descriptor = toml::from_str(&content).map_err(|e| SbomError::DescriptorParse {
            path,
            details: e.to_string(),
        })?;
        Ok(descriptor)
    }
}
