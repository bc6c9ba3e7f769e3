//! Constructs the package/relationship fragment describing one classified
//! file.

use std::path::Path;

use crate::sbom::domain::spdx_id::{doc_ref_id, package_id, PackageKind};
use crate::sbom::domain::{
    DownloadLocation, ExternalDocumentRef, ExternalRefCategory, ExternalRefType,
    InstalledFileRecord, MetadataDescriptor, Package, PackageExternalRef, Relationship,
    RelationshipKind,
};
use crate::sbom::services::classifier::PackageClass;
use crate::sbom::services::resolver::NVD_CPE23;

/// Packages, edges and at most one external document reference produced for
/// one record. Pure data; the caller folds it into the document. The first
/// package is always the fork package the installed file belongs to.
#[derive(Debug, Default)]
pub struct SbomFragment {
    pub packages: Vec<Package>,
    pub relationships: Vec<Relationship>,
    pub external_doc_ref: Option<ExternalDocumentRef>,
}

impl SbomFragment {
    /// Identifier of the fork package owning the installed file, if any.
    pub fn fork_package_id(&self) -> Option<&str> {
        self.packages.first().map(|p| p.id.as_str())
    }
}

/// Builds SBOM fragments for classified records. Carries the run-wide build
/// version and manufacturer stamped into every fork package.
pub struct FragmentBuilder {
    build_version: String,
    product_mfr: String,
}

impl FragmentBuilder {
    pub fn new(build_version: impl Into<String>, product_mfr: impl Into<String>) -> Self {
        Self {
            build_version: build_version.into(),
            product_mfr: product_mfr.into(),
        }
    }

    /// Construct the fragment for one record. Platform files produce an
    /// empty fragment; the caller attaches them to the singleton platform
    /// package directly.
    pub fn build(
        &self,
        record: &InstalledFileRecord,
        class: PackageClass,
        metadata_dir: Option<&Path>,
        descriptor: Option<&MetadataDescriptor>,
    ) -> SbomFragment {
        match class {
            PackageClass::Source => self.source_fragment(record, metadata_dir, descriptor),
            PackageClass::Prebuilt => self.prebuilt_fragment(record, metadata_dir, descriptor),
            PackageClass::Platform => SbomFragment::default(),
        }
    }

    fn supplier(&self) -> String {
        format!("Organization: {}", self.product_mfr)
    }

    /// Source fork: a SOURCE package for the local fork plus an UPSTREAM
    /// package for its origin, linked by a VARIANT_OF edge.
    fn source_fragment(
        &self,
        record: &InstalledFileRecord,
        metadata_dir: Option<&Path>,
        descriptor: Option<&MetadataDescriptor>,
    ) -> SbomFragment {
        let name = source_package_name(record, metadata_dir, descriptor);
        let external_refs = descriptor.map(security_refs).unwrap_or_default();

        let source_id = package_id(&name, PackageKind::Source);
        let source_package = Package {
            id: source_id.clone(),
            name: name.clone(),
            version: Some(self.build_version.clone()),
            supplier: Some(self.supplier()),
            download_location: DownloadLocation::Withheld,
            external_refs,
            ..Default::default()
        };

        let upstream_id = package_id(&name, PackageKind::Upstream);
        let upstream_package = Package {
            id: upstream_id.clone(),
            name,
            version: descriptor.and_then(|d| d.third_party.version.clone()),
            supplier: descriptor
                .and_then(|d| d.homepage())
                .map(|homepage| format!("Organization: {}", homepage)),
            download_location: DownloadLocation::from_url(
                descriptor.and_then(|d| d.download_location().map(str::to_string)),
            ),
            ..Default::default()
        };

        SbomFragment {
            packages: vec![source_package, upstream_package],
            relationships: vec![Relationship::new(
                source_id,
                RelationshipKind::VariantOf,
                upstream_id,
            )],
            external_doc_ref: None,
        }
    }

    /// Prebuilt fork: one PREBUILT package, plus a cross-document VARIANT_OF
    /// edge when the descriptor points at an externally tracked upstream
    /// SBOM.
    fn prebuilt_fragment(
        &self,
        record: &InstalledFileRecord,
        metadata_dir: Option<&Path>,
        descriptor: Option<&MetadataDescriptor>,
    ) -> SbomFragment {
        let name = prebuilt_package_name(record, metadata_dir, descriptor);
        let prebuilt_id = package_id(&name, PackageKind::Prebuilt);
        let prebuilt_package = Package {
            id: prebuilt_id.clone(),
            name: name.clone(),
            version: Some(self.build_version.clone()),
            supplier: Some(self.supplier()),
            download_location: DownloadLocation::Withheld,
            ..Default::default()
        };

        let mut fragment = SbomFragment {
            packages: vec![prebuilt_package],
            ..Default::default()
        };

        if let Some(sbom_ref) = descriptor.and_then(|d| d.complete_sbom_ref()) {
            let ref_id = doc_ref_id(&name);
            fragment.relationships.push(Relationship::new(
                prebuilt_id,
                RelationshipKind::VariantOf,
                format!("{}:{}", ref_id, sbom_ref.element_id),
            ));
            fragment.external_doc_ref = Some(ExternalDocumentRef {
                id: ref_id,
                uri: sbom_ref.url.clone(),
                checksum: sbom_ref.checksum.clone(),
            });
        }

        fragment
    }
}

/// Display name of a source package, first match wins:
/// descriptor name, resolved directory base name, raw module path.
fn source_package_name(
    record: &InstalledFileRecord,
    metadata_dir: Option<&Path>,
    descriptor: Option<&MetadataDescriptor>,
) -> String {
    descriptor
        .and_then(|d| d.name.clone())
        .filter(|n| !n.is_empty())
        .or_else(|| {
            metadata_dir
                .and_then(|dir| dir.file_name())
                .map(|base| base.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| record.module_path.clone())
}

/// Display name of a prebuilt package, first match wins: descriptor name,
/// resolved directory path, module path, kernel-module source directory.
/// The `prebuilts/` prefix is stripped and path separators become `-`.
fn prebuilt_package_name(
    record: &InstalledFileRecord,
    metadata_dir: Option<&Path>,
    descriptor: Option<&MetadataDescriptor>,
) -> String {
    let raw = descriptor
        .and_then(|d| d.name.clone())
        .filter(|n| !n.is_empty())
        .or_else(|| metadata_dir.map(|dir| dir.to_string_lossy().into_owned()))
        .or_else(|| {
            if record.module_path.is_empty() {
                None
            } else {
                Some(record.module_path.clone())
            }
        })
        .or_else(|| {
            record.kernel_module_copy_source().map(|src| {
                Path::new(src)
                    .parent()
                    .unwrap_or(Path::new(""))
                    .to_string_lossy()
                    .into_owned()
            })
        })
        .unwrap_or_default();

    raw.strip_prefix("prebuilts/")
        .unwrap_or(&raw)
        .replace('/', "-")
}

/// Parse recognized `NVD-CPE2.3:` security tags into CPE external refs.
/// Unrecognized tags are skipped here; the resolver already diagnosed them.
fn security_refs(descriptor: &MetadataDescriptor) -> Vec<PackageExternalRef> {
    let cpe23_prefix = format!("{}cpe:2.3:", NVD_CPE23).to_lowercase();
    let cpe22_prefix = format!("{}cpe:/", NVD_CPE23).to_lowercase();

    descriptor
        .third_party
        .security
        .tag
        .iter()
        .filter_map(|tag| {
            let lowered = tag.to_lowercase();
            let ref_type = if lowered.starts_with(&cpe23_prefix) {
                ExternalRefType::Cpe23Type
            } else if lowered.starts_with(&cpe22_prefix) {
                ExternalRefType::Cpe22Type
            } else {
                return None;
            };
            Some(PackageExternalRef {
                category: ExternalRefCategory::Security,
                ref_type,
                locator: tag.strip_prefix(NVD_CPE23).unwrap_or(tag).to_string(),
            })
        })
        .collect()
}
