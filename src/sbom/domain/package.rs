/// Download location of a package, as asserted in the SBOM.
///
/// The SPDX text format spells the non-URL cases as the sentinel strings
/// `NONE` and `NOASSERTION`; modeling them as variants keeps call sites
/// exhaustiveness-checked instead of comparing magic strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DownloadLocation {
    /// A concrete URL where the code can be fetched
    Explicit(String),
    /// Intentionally withheld by the supplier
    Withheld,
    /// No assertion is made either way
    #[default]
    NotAsserted,
}

impl DownloadLocation {
    /// The SPDX spelling of this location.
    pub fn as_spdx(&self) -> &str {
        match self {
            DownloadLocation::Explicit(url) => url,
            DownloadLocation::Withheld => "NONE",
            DownloadLocation::NotAsserted => "NOASSERTION",
        }
    }

    /// Build from an optional URL, mapping absence to NOASSERTION.
    pub fn from_url(url: Option<String>) -> Self {
        match url {
            Some(url) if !url.is_empty() => DownloadLocation::Explicit(url),
            _ => DownloadLocation::NotAsserted,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalRefCategory {
    Security,
}

impl ExternalRefCategory {
    pub fn as_spdx(self) -> &'static str {
        match self {
            ExternalRefCategory::Security => "SECURITY",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalRefType {
    Cpe22Type,
    Cpe23Type,
}

impl ExternalRefType {
    pub fn as_spdx(self) -> &'static str {
        match self {
            ExternalRefType::Cpe22Type => "cpe22Type",
            ExternalRefType::Cpe23Type => "cpe23Type",
        }
    }
}

/// A security identifier attached to a package (CPE 2.2 or 2.3 locator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageExternalRef {
    pub category: ExternalRefCategory,
    pub ref_type: ExternalRefType,
    pub locator: String,
}

/// A package node in the SBOM graph.
///
/// Immutable after insertion into the document, except for the product
/// package whose file membership and verification code are filled in once
/// the full file list is known.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Package {
    pub id: String,
    pub name: String,
    pub version: Option<String>,
    /// `Organization: <name>` string; None renders as NOASSERTION
    pub supplier: Option<String>,
    pub download_location: DownloadLocation,
    pub external_refs: Vec<PackageExternalRef>,
    /// Whether files of this package were analyzed (product package only)
    pub files_analyzed: bool,
    /// Members of the product package, in insertion order
    pub file_ids: Vec<String>,
    /// Sorted-checksum digest over the member files
    pub verification_code: Option<String>,
}
