use std::fs;
use std::path::{Path, PathBuf};

use crate::ports::outbound::OutputPresenter;
use crate::shared::error::SbomError;
use crate::shared::Result;

/// FileSystemWriter adapter for writing output to files
///
/// Implements the OutputPresenter port for file output.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(SbomError::OutputWrite {
                    path: self.output_path.clone(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate_parent_directory()?;
        fs::write(&self.output_path, content).map_err(|e| {
            SbomError::OutputWrite {
                path: self.output_path.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
