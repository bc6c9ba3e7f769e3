//! Side-channel diagnostics accumulated during generation.

use std::io::Write;

use crate::shared::Result;

/// Fixed diagnostic categories, in report order. Never fatal; these record
/// attribution anomalies for post-run review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueCategory {
    NoMetadata,
    NoMetadataFile,
    MetadataIncomplete,
    UnknownSecurityTag,
    FileNotExist,
    MetadataFound,
}

impl IssueCategory {
    const ALL: [IssueCategory; 6] = [
        IssueCategory::NoMetadata,
        IssueCategory::NoMetadataFile,
        IssueCategory::MetadataIncomplete,
        IssueCategory::UnknownSecurityTag,
        IssueCategory::FileNotExist,
        IssueCategory::MetadataFound,
    ];

    fn heading(self) -> &'static str {
        match self {
            IssueCategory::NoMetadata => "No metadata generated in Make for installed files:",
            IssueCategory::NoMetadataFile => "No METADATA file found for installed file:",
            IssueCategory::MetadataIncomplete => "METADATA file incomplete:",
            IssueCategory::UnknownSecurityTag => "Unknown security tag type:",
            IssueCategory::FileNotExist => "Non-exist installed files:",
            IssueCategory::MetadataFound => "METADATA file found for packages:",
        }
    }

    fn index(self) -> usize {
        IssueCategory::ALL
            .iter()
            .position(|c| *c == self)
            .unwrap_or(0)
    }
}

/// Append-only, ordered-by-category accumulation of human-readable messages.
#[derive(Debug, Default)]
pub struct GenReport {
    entries: [Vec<String>; 6],
}

impl GenReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, category: IssueCategory, message: impl Into<String>) {
        self.entries[category.index()].push(message.into());
    }

    pub fn messages(&self, category: IssueCategory) -> &[String] {
        &self.entries[category.index()]
    }

    /// Render one named section per category, each entry tab-indented.
    pub fn write_to(&self, mut out: impl Write) -> Result<()> {
        for category in IssueCategory::ALL {
            writeln!(out, "{}", category.heading())?;
            for message in self.messages(category) {
                writeln!(out, "\t{}", message)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}
