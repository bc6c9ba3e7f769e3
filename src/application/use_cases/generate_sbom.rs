use chrono::Utc;

use crate::application::dto::{GenerateRequest, GenerateResponse};
use crate::ports::outbound::{ContentAccessor, MetadataReader, ProgressReporter, RecordSource};
use crate::sbom::domain::spdx_id::{file_id, package_id, PackageKind, SPDXID_PLATFORM, SPDXID_PRODUCT};
use crate::sbom::domain::{
    Document, DownloadLocation, File, InstalledFileRecord, Package, Relationship,
    RelationshipKind,
};
use crate::sbom::services::classifier::{classify, PackageClass};
use crate::sbom::services::fragments::FragmentBuilder;
use crate::sbom::services::integrity::verification_code;
use crate::sbom::services::report::{GenReport, IssueCategory};
use crate::sbom::services::resolver::MetadataResolver;
use crate::shared::Result;

/// Installed files carrying filesystem-verity metadata; always
/// platform-generated.
const FSVERITY_METADATA_SUFFIX: &str = ".fsv_meta";

/// GenerateSbomUseCase - single-pass SBOM assembly
///
/// Folds every attribution record into the document in file order: classify,
/// resolve metadata, build the package fragment, attach the file with a
/// typed edge. One synchronous pass; per-file anomalies go to the report and
/// processing continues.
///
/// # Type Parameters
/// * `RS` - RecordSource implementation
/// * `MR` - MetadataReader implementation
/// * `CA` - ContentAccessor implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateSbomUseCase<RS, MR, CA, PR> {
    record_source: RS,
    resolver: MetadataResolver<MR>,
    content_accessor: CA,
    progress_reporter: PR,
}

impl<RS, MR, CA, PR> GenerateSbomUseCase<RS, MR, CA, PR>
where
    RS: RecordSource,
    MR: MetadataReader,
    CA: ContentAccessor,
    PR: ProgressReporter,
{
    /// Creates a new GenerateSbomUseCase with injected dependencies
    pub fn new(
        record_source: RS,
        metadata_reader: MR,
        content_accessor: CA,
        progress_reporter: PR,
    ) -> Self {
        Self {
            record_source,
            resolver: MetadataResolver::new(metadata_reader),
            content_accessor,
            progress_reporter,
        }
    }

    /// Executes the full-product generation pass
    pub fn execute(&mut self, request: &GenerateRequest) -> Result<GenerateResponse> {
        let records = self.record_source.read_records(&request.metadata_path)?;
        self.progress_reporter
            .report(&format!("Loaded {} attribution record(s)", records.len()));

        let mut document = Document::new(
            &request.build_version,
            request.document_namespace(),
            vec![request.creator()],
        );
        document.add_package(Package {
            id: SPDXID_PRODUCT.to_string(),
            name: "PRODUCT".to_string(),
            version: Some(request.build_version.clone()),
            supplier: Some(request.creator()),
            download_location: DownloadLocation::Withheld,
            files_analyzed: true,
            ..Default::default()
        });
        document.add_package(Package {
            id: SPDXID_PLATFORM.to_string(),
            name: "PLATFORM".to_string(),
            version: Some(request.build_version.clone()),
            supplier: Some(request.creator()),
            download_location: DownloadLocation::Withheld,
            ..Default::default()
        });
        document.set_describes(SPDXID_PRODUCT);

        let mut report = GenReport::new();
        let builder = FragmentBuilder::new(&request.build_version, &request.product_mfr);
        let mut product_file_ids = Vec::new();

        for record in &records {
            if !has_build_metadata(record) {
                report.add(IssueCategory::NoMetadata, record.installed_file.clone());
                continue;
            }
            if !self.content_accessor.exists(&record.installed_file) {
                report.add(IssueCategory::FileNotExist, record.installed_file.clone());
                continue;
            }

            let fid = file_id(&record.installed_file);
            document.add_file(File {
                id: fid.clone(),
                name: record.installed_file.clone(),
                checksum: self.content_accessor.checksum(&record.installed_file)?,
            });
            product_file_ids.push(fid.clone());

            match classify(record) {
                class @ (PackageClass::Source | PackageClass::Prebuilt) => {
                    let metadata_dir = self.resolver.resolve(record, &mut report)?;
                    match &metadata_dir {
                        Some(dir) => report.add(
                            IssueCategory::MetadataFound,
                            format!(
                                "installed_file: {}, module_path: {}, METADATA file: {}/METADATA",
                                record.installed_file,
                                record.module_path,
                                dir.display()
                            ),
                        ),
                        None => report.add(
                            IssueCategory::NoMetadataFile,
                            format!(
                                "installed_file: {}, module_path: {}",
                                record.installed_file, record.module_path
                            ),
                        ),
                    }

                    let descriptor = metadata_dir
                        .as_deref()
                        .and_then(|dir| self.resolver.descriptor(dir))
                        .cloned();
                    let fragment =
                        builder.build(record, class, metadata_dir.as_deref(), descriptor.as_ref());

                    let fork_id = fragment.fork_package_id().map(str::to_string);
                    if let Some(ext) = fragment.external_doc_ref {
                        document.add_external_ref(ext);
                    }
                    for package in fragment.packages {
                        document.add_package(package);
                    }
                    for relationship in fragment.relationships {
                        document.add_relationship(relationship);
                    }
                    if let Some(fork_id) = fork_id {
                        document.add_relationship(Relationship::new(
                            fid,
                            RelationshipKind::GeneratedFrom,
                            fork_id,
                        ));
                    }
                }
                PackageClass::Platform => {
                    document.add_relationship(Relationship::new(
                        fid,
                        RelationshipKind::GeneratedFrom,
                        SPDXID_PLATFORM,
                    ));
                }
            }
        }

        let code = verification_code(&document.files);
        if let Some(product) = document.package_mut(SPDXID_PRODUCT) {
            product.file_ids = product_file_ids;
            product.verification_code = Some(code);
        }
        document.created = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

        self.progress_reporter.report(&format!(
            "Assembled {} package(s), {} file(s), {} relationship(s)",
            document.packages.len(),
            document.files.len(),
            document.relationships.len()
        ));

        Ok(GenerateResponse { document, report })
    }

    /// Executes the unbundled-module pass: a per-file SPDX fragment for the
    /// single record whose per-file output path matches the requested output
    /// file.
    pub fn execute_unbundled(&mut self, request: &GenerateRequest) -> Result<GenerateResponse> {
        let records = self.record_source.read_records(&request.metadata_path)?;

        let mut document = Document::new(
            &request.build_version,
            request.document_namespace(),
            vec![request.creator()],
        );

        for record in &records {
            let per_file_output = request
                .product_out_dir
                .join(format!("{}.spdx", record.installed_file));
            if per_file_output != request.output_file {
                continue;
            }

            let pkg_id = package_id(&record.module_path, PackageKind::Prebuilt);
            document.add_package(Package {
                id: pkg_id.clone(),
                name: record.module_path.clone(),
                version: Some(request.build_version.clone()),
                supplier: Some(request.creator()),
                ..Default::default()
            });

            let fid = file_id(&record.installed_file);
            document.add_file(File {
                id: fid.clone(),
                name: record.installed_file.clone(),
                checksum: self.content_accessor.checksum(&record.installed_file)?,
            });
            document.add_relationship(Relationship::new(
                fid.clone(),
                RelationshipKind::GeneratedFrom,
                pkg_id,
            ));
            document.set_describes(fid);
            document.created = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
            break;
        }

        Ok(GenerateResponse {
            document,
            report: GenReport::new(),
        })
    }
}

/// Whether the build produced any attribution for this file. Records with
/// none at all contribute nothing to the graph and are diagnosed.
fn has_build_metadata(record: &InstalledFileRecord) -> bool {
    !record.module_path.is_empty()
        || !record.product_copy_files.is_empty()
        || !record.kernel_module_copy_files.is_empty()
        || record.is_platform_generated
        || record.installed_file.ends_with(FSVERITY_METADATA_SUFFIX)
}
