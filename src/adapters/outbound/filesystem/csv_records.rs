use std::path::Path;

use crate::ports::outbound::RecordSource;
use crate::sbom::domain::InstalledFileRecord;
use crate::shared::error::SbomError;
use crate::shared::Result;

/// CsvRecordSource adapter reading the build's sbom-metadata.csv
///
/// The stream itself being missing or malformed aborts the run; each row
/// deserializes into one InstalledFileRecord.
pub struct CsvRecordSource;

impl CsvRecordSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvRecordSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordSource for CsvRecordSource {
    fn read_records(&self, metadata_path: &Path) -> Result<Vec<InstalledFileRecord>> {
        if !metadata_path.exists() {
            return Err(SbomError::MetadataStreamNotFound {
                path: metadata_path.to_path_buf(),
            }
            .into());
        }

        let mut reader =
            csv::Reader::from_path(metadata_path).map_err(|e| SbomError::MetadataStreamRead {
                path: metadata_path.to_path_buf(),
                details: e.to_string(),
            })?;

        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: InstalledFileRecord = row.map_err(|e| {
                let line = e
                    .position()
                    .map(|position| position.line())
                    .unwrap_or_default();
                SbomError::MalformedRecord {
                    path: metadata_path.to_path_buf(),
                    line,
                    details: e.to_string(),
                }
            })?;
            records.push(record);
        }
        Ok(records)
    }
}
