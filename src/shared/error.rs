use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow build systems to distinguish between different
/// types of failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - SBOM generated (per-file anomalies may still be in the report)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable metadata stream, unparseable METADATA file, I/O error)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for SBOM generation.
///
/// Uses thiserror to derive Display and Error traits automatically.
/// Anything representable here is fatal; per-file attribution anomalies
/// go to the diagnostics report instead.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Metadata stream not found: {path}\nHint: pass the sbom-metadata.csv produced by the build with --metadata")]
    MetadataStreamNotFound { path: PathBuf },

    #[error("Failed to read metadata stream: {path}\nDetails: {details}")]
    MetadataStreamRead { path: PathBuf, details: String },

    #[error("Malformed metadata record in {path} at line {line}: {details}")]
    MalformedRecord {
        path: PathBuf,
        line: u64,
        details: String,
    },

    #[error("METADATA file present but unparseable: {path}\nDetails: {details}")]
    DescriptorParse { path: PathBuf, details: String },

    #[error("Failed to write output: {path}\nDetails: {details}")]
    OutputWrite { path: PathBuf, details: String },

    #[error("Failed to checksum installed file: {path}\nDetails: {details}")]
    Checksum { path: PathBuf, details: String },
}
