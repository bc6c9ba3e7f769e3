use serde::Serialize;

use crate::ports::outbound::SbomFormatter;
use crate::sbom::domain::spdx_id::SPDXID_DOCUMENT;
use crate::sbom::domain::{Document, Package};
use crate::shared::Result;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpdxDocument {
    spdx_version: String,
    data_license: String,
    #[serde(rename = "SPDXID")]
    spdx_id: String,
    name: String,
    document_namespace: String,
    creation_info: CreationInfo,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    external_document_refs: Vec<ExternalDocumentRef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    document_describes: Vec<String>,
    packages: Vec<SpdxPackage>,
    files: Vec<SpdxFile>,
    relationships: Vec<SpdxRelationship>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreationInfo {
    created: String,
    creators: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExternalDocumentRef {
    external_document_id: String,
    spdx_document: String,
    checksum: Checksum,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Checksum {
    algorithm: String,
    checksum_value: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpdxPackage {
    name: String,
    #[serde(rename = "SPDXID")]
    spdx_id: String,
    download_location: String,
    files_analyzed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    version_info: Option<String>,
    supplier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    package_verification_code: Option<VerificationCode>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    has_files: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    external_refs: Vec<ExternalRef>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VerificationCode {
    package_verification_code_value: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExternalRef {
    reference_category: String,
    reference_type: String,
    reference_locator: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpdxFile {
    file_name: String,
    #[serde(rename = "SPDXID")]
    spdx_id: String,
    checksums: Vec<Checksum>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpdxRelationship {
    spdx_element_id: String,
    relationship_type: String,
    related_spdx_element: String,
}

/// JsonFormatter adapter for the SPDX 2.3 JSON encoding
///
/// Mirrors the document into serde structs; carries the same logical
/// content as the tag/value encoding.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for JsonFormatter {
    fn format(&self, document: &Document) -> Result<String> {
        let spdx = SpdxDocument {
            spdx_version: "SPDX-2.3".to_string(),
            data_license: "CC0-1.0".to_string(),
            spdx_id: SPDXID_DOCUMENT.to_string(),
            name: document.name.clone(),
            document_namespace: document.namespace.clone(),
            creation_info: CreationInfo {
                created: document.created.clone(),
                creators: document.creators.clone(),
            },
            external_document_refs: document
                .external_refs
                .iter()
                .map(|ext| ExternalDocumentRef {
                    external_document_id: ext.id.clone(),
                    spdx_document: ext.uri.clone(),
                    checksum: split_checksum(&ext.checksum),
                })
                .collect(),
            document_describes: document.describes.iter().cloned().collect(),
            packages: document.packages.iter().map(build_package).collect(),
            files: document
                .files
                .iter()
                .map(|file| SpdxFile {
                    file_name: file.name.clone(),
                    spdx_id: file.id.clone(),
                    checksums: vec![split_checksum(&file.checksum)],
                })
                .collect(),
            relationships: document
                .relationships
                .iter()
                .map(|rel| SpdxRelationship {
                    spdx_element_id: rel.id1.clone(),
                    relationship_type: rel.kind.as_spdx().to_string(),
                    related_spdx_element: rel.id2.clone(),
                })
                .collect(),
        };

        serde_json::to_string_pretty(&spdx).map_err(Into::into)
    }
}

fn build_package(package: &Package) -> SpdxPackage {
    SpdxPackage {
        name: package.name.clone(),
        spdx_id: package.id.clone(),
        download_location: package.download_location.as_spdx().to_string(),
        files_analyzed: package.files_analyzed,
        version_info: package.version.clone(),
        supplier: package
            .supplier
            .clone()
            .unwrap_or_else(|| "NOASSERTION".to_string()),
        package_verification_code: package.verification_code.as_ref().map(|code| {
            VerificationCode {
                package_verification_code_value: code.clone(),
            }
        }),
        has_files: package.file_ids.clone(),
        external_refs: package
            .external_refs
            .iter()
            .map(|ext| ExternalRef {
                reference_category: ext.category.as_spdx().to_string(),
                reference_type: ext.ref_type.as_spdx().to_string(),
                reference_locator: ext.locator.clone(),
            })
            .collect(),
    }
}

/// Split a `SHA1: <hex>` checksum string into algorithm and value.
fn split_checksum(checksum: &str) -> Checksum {
    match checksum.split_once(": ") {
        Some((algorithm, value)) => Checksum {
            algorithm: algorithm.to_string(),
            checksum_value: value.to_string(),
        },
        None => Checksum {
            algorithm: "SHA1".to_string(),
            checksum_value: checksum.to_string(),
        },
    }
}
