use std::fmt::Write;

use crate::ports::outbound::SbomFormatter;
use crate::sbom::domain::spdx_id::SPDXID_DOCUMENT;
use crate::sbom::domain::{Document, Package};
use crate::shared::Result;

/// TagValueFormatter adapter for the SPDX 2.3 tag/value text encoding
///
/// In fragment mode the document header and DESCRIBES line are suppressed,
/// producing a per-file fragment suitable for concatenation into a larger
/// document (unbundled builds).
pub struct TagValueFormatter {
    fragment: bool,
}

impl TagValueFormatter {
    pub fn new() -> Self {
        Self { fragment: false }
    }

    pub fn fragment() -> Self {
        Self { fragment: true }
    }
}

impl Default for TagValueFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for TagValueFormatter {
    fn format(&self, document: &Document) -> Result<String> {
        let mut out = String::new();

        if !self.fragment {
            write_header(&mut out, document)?;
        }

        for package in &document.packages {
            write_package(&mut out, package)?;
        }

        for file in &document.files {
            writeln!(out, "FileName: {}", file.name)?;
            writeln!(out, "SPDXID: {}", file.id)?;
            writeln!(out, "FileChecksum: {}", file.checksum)?;
            writeln!(out)?;
        }

        for rel in &document.relationships {
            writeln!(
                out,
                "Relationship: {} {} {}",
                rel.id1,
                rel.kind.as_spdx(),
                rel.id2
            )?;
        }
        if !document.relationships.is_empty() {
            writeln!(out)?;
        }

        Ok(out)
    }
}

fn write_header(out: &mut String, document: &Document) -> Result<()> {
    writeln!(out, "SPDXVersion: SPDX-2.3")?;
    writeln!(out, "DataLicense: CC0-1.0")?;
    writeln!(out, "SPDXID: {}", SPDXID_DOCUMENT)?;
    writeln!(out, "DocumentName: {}", document.name)?;
    writeln!(out, "DocumentNamespace: {}", document.namespace)?;
    for ext in &document.external_refs {
        writeln!(out, "ExternalDocumentRef: {} {} {}", ext.id, ext.uri, ext.checksum)?;
    }
    for creator in &document.creators {
        writeln!(out, "Creator: {}", creator)?;
    }
    writeln!(out, "Created: {}", document.created)?;
    writeln!(out)?;

    if let Some(describes) = &document.describes {
        writeln!(out, "Relationship: {} DESCRIBES {}", SPDXID_DOCUMENT, describes)?;
        writeln!(out)?;
    }
    Ok(())
}

fn write_package(out: &mut String, package: &Package) -> Result<()> {
    writeln!(out, "PackageName: {}", package.name)?;
    writeln!(out, "SPDXID: {}", package.id)?;
    writeln!(
        out,
        "PackageDownloadLocation: {}",
        package.download_location.as_spdx()
    )?;
    writeln!(out, "FilesAnalyzed: {}", package.files_analyzed)?;
    if let Some(version) = &package.version {
        writeln!(out, "PackageVersion: {}", version)?;
    }
    writeln!(
        out,
        "PackageSupplier: {}",
        package.supplier.as_deref().unwrap_or("NOASSERTION")
    )?;
    if let Some(code) = &package.verification_code {
        writeln!(out, "PackageVerificationCode: {}", code)?;
    }
    for ext in &package.external_refs {
        writeln!(
            out,
            "ExternalRef: {} {} {}",
            ext.category.as_spdx(),
            ext.ref_type.as_spdx(),
            ext.locator
        )?;
    }
    writeln!(out)?;
    Ok(())
}
