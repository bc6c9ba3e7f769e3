use crate::sbom::domain::Document;
use crate::sbom::services::GenReport;

/// Result of one SBOM generation run: the assembled document plus the
/// side-channel diagnostics report.
#[derive(Debug)]
pub struct GenerateResponse {
    pub document: Document,
    pub report: GenReport,
}
