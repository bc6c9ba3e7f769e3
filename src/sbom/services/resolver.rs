//! Locates and caches per-directory metadata descriptors.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::ports::outbound::MetadataReader;
use crate::sbom::domain::{InstalledFileRecord, MetadataDescriptor};
use crate::sbom::services::report::{GenReport, IssueCategory};
use crate::shared::Result;

/// Recognized security tag prefix scheme.
pub const NVD_CPE23: &str = "NVD-CPE2.3:";

/// Walks upward from a file's owning directory to the nearest METADATA
/// descriptor and caches parsed descriptors by directory for the run.
///
/// The cache is owned here and scoped to one resolver instance; a second
/// resolution of the same directory within a run does not re-read the file.
pub struct MetadataResolver<MR> {
    reader: MR,
    cache: HashMap<PathBuf, MetadataDescriptor>,
}

impl<MR: MetadataReader> MetadataResolver<MR> {
    pub fn new(reader: MR) -> Self {
        Self {
            reader,
            cache: HashMap::new(),
        }
    }

    /// Resolve the metadata directory for one record.
    ///
    /// Returns the nearest ancestor directory carrying a descriptor, or None
    /// when the record has no owning directory or no ancestor has one. On
    /// first resolution of a directory the descriptor is parsed and
    /// validated; required-field and tag-syntax violations are recorded as
    /// diagnostics. A descriptor that is present but unparseable is fatal.
    pub fn resolve(
        &mut self,
        record: &InstalledFileRecord,
        report: &mut GenReport,
    ) -> Result<Option<PathBuf>> {
        let Some(start) = Self::owning_directory(record) else {
            return Ok(None);
        };

        let mut dir = start;
        loop {
            if self.reader.has_descriptor(&dir) {
                self.load_descriptor(&dir, report)?;
                return Ok(Some(dir));
            }
            match dir.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => dir = parent.to_path_buf(),
                _ => return Ok(None),
            }
        }
    }

    /// Parsed descriptor of an already-resolved directory.
    pub fn descriptor(&self, dir: &Path) -> Option<&MetadataDescriptor> {
        self.cache.get(dir)
    }

    /// Owning directory of a record: the module path, or the directory of
    /// the kernel-module copy source.
    fn owning_directory(record: &InstalledFileRecord) -> Option<PathBuf> {
        if !record.module_path.is_empty() {
            return Some(PathBuf::from(&record.module_path));
        }
        record
            .kernel_module_copy_source()
            .map(|src| Path::new(src).parent().unwrap_or(Path::new("")).to_path_buf())
            .filter(|dir| !dir.as_os_str().is_empty())
    }

    fn load_descriptor(&mut self, dir: &Path, report: &mut GenReport) -> Result<()> {
        if self.cache.contains_key(dir) {
            return Ok(());
        }

        let descriptor = self.reader.read_descriptor(dir)?;
        validate_descriptor(dir, &descriptor, report);
        self.cache.insert(dir.to_path_buf(), descriptor);
        Ok(())
    }
}

/// Record diagnostics for missing required fields and unrecognized security
/// tag syntax. Violations never abort the run.
fn validate_descriptor(dir: &Path, descriptor: &MetadataDescriptor, report: &mut GenReport) {
    let metadata_file = format!("{}/METADATA", dir.display());

    if descriptor.name.as_deref().unwrap_or("").is_empty() {
        report.add(
            IssueCategory::MetadataIncomplete,
            format!("{} does not has \"name\"", metadata_file),
        );
    }
    if descriptor
        .third_party
        .version
        .as_deref()
        .unwrap_or("")
        .is_empty()
    {
        report.add(
            IssueCategory::MetadataIncomplete,
            format!("{} does not has \"third_party.version\"", metadata_file),
        );
    }
    for tag in &descriptor.third_party.security.tag {
        if !tag.starts_with(NVD_CPE23) {
            report.add(
                IssueCategory::UnknownSecurityTag,
                format!("Unknown security tag type: {} in {}", tag, metadata_file),
            );
        }
    }
}
