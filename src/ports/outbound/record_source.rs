use std::path::Path;

use crate::sbom::domain::InstalledFileRecord;
use crate::shared::Result;

/// RecordSource port for the installed-file attribution stream
///
/// Abstracts the build-system metadata input (sbom-metadata.csv) as an
/// ordered sequence of records. The whole stream being missing or malformed
/// is fatal; per-record anomalies are the core's business.
pub trait RecordSource {
    /// Reads all attribution records in file order
    ///
    /// # Errors
    /// Returns an error if the stream does not exist, cannot be read, or a
    /// row does not match the expected columns.
    fn read_records(&self, metadata_path: &Path) -> Result<Vec<InstalledFileRecord>>;
}
