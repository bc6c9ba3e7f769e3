use std::path::PathBuf;

use clap::Parser;

/// Generate the SBOM of an installed product image in SPDX format
#[derive(Parser, Debug)]
#[command(name = "product-sbom")]
#[command(version)]
#[command(about = "Generate the SBOM of an installed product image in SPDX format", long_about = None)]
pub struct Args {
    /// The generated SBOM file in SPDX tag/value format
    #[arg(long)]
    pub output_file: PathBuf,

    /// The SBOM metadata CSV file produced by the build
    #[arg(long)]
    pub metadata: PathBuf,

    /// The parent directory of all the installed files
    #[arg(long)]
    pub product_out_dir: PathBuf,

    /// The build version
    #[arg(long)]
    pub build_version: String,

    /// The product manufacturer
    #[arg(long)]
    pub product_mfr: String,

    /// Additionally generate the SBOM in SPDX JSON format
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Generate an SBOM fragment for a single unbundled module
    #[arg(long, default_value_t = false)]
    pub unbundled: bool,

    /// Print more information
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Path of the diagnostics report, next to the output file.
    pub fn report_path(&self) -> PathBuf {
        let stem = self
            .output_file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.output_file
            .with_file_name(format!("{}-gen-report.txt", stem))
    }

    /// Path of the JSON encoding, derived from the output file.
    pub fn json_output_path(&self) -> PathBuf {
        let mut path = self.output_file.as_os_str().to_owned();
        path.push(".json");
        PathBuf::from(path)
    }
}
