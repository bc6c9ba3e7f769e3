use std::path::PathBuf;

/// Request for one SBOM generation run.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Path to the sbom-metadata.csv attribution stream
    pub metadata_path: PathBuf,
    /// Parent directory of all installed files
    pub product_out_dir: PathBuf,
    /// Build version stamped into the document and fork packages
    pub build_version: String,
    /// Product manufacturer, rendered as the `Organization:` supplier
    pub product_mfr: String,
    /// Target output path; consulted by unbundled mode to select the record
    pub output_file: PathBuf,
}

impl GenerateRequest {
    pub fn new(
        metadata_path: impl Into<PathBuf>,
        product_out_dir: impl Into<PathBuf>,
        build_version: impl Into<String>,
        product_mfr: impl Into<String>,
        output_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            metadata_path: metadata_path.into(),
            product_out_dir: product_out_dir.into(),
            build_version: build_version.into(),
            product_mfr: product_mfr.into(),
            output_file: output_file.into(),
        }
    }

    /// Document namespace derived from the build version.
    pub fn document_namespace(&self) -> String {
        format!(
            "https://www.google.com/sbom/spdx/android/{}",
            self.build_version
        )
    }

    /// The `Organization: <mfr>` creator string.
    pub fn creator(&self) -> String {
        format!("Organization: {}", self.product_mfr)
    }
}
