//! product-sbom - SPDX SBOM generation for installed product images
//!
//! This library turns the build system's per-file attribution metadata into
//! an SPDX bill-of-materials document: a graph of packages, installed files,
//! and typed relationships suitable for supply-chain auditing.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom`): the document model and the attribution
//!   services (classifier, metadata resolver, fragment builder, integrity
//!   computer, diagnostics report)
//! - **Application Layer** (`application`): the generation use case and DTOs
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): common error types and the Result alias
//!
//! # Example
//!
//! ```no_run
//! use product_sbom::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let mut use_case = GenerateSbomUseCase::new(
//!     CsvRecordSource::new(),
//!     TomlMetadataReader::new("."),
//!     FsContentAccessor::new("out/target/product/generic"),
//!     StderrProgressReporter::new(false),
//! );
//!
//! let request = GenerateRequest::new(
//!     "out/target/product/generic/sbom-metadata.csv",
//!     "out/target/product/generic",
//!     "my-build-id",
//!     "ACME",
//!     "out/target/product/generic/sbom.spdx",
//! );
//! let response = use_case.execute(&request)?;
//!
//! let output = TagValueFormatter::new().format(&response.document)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod ports;
pub mod sbom;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        CsvRecordSource, FileSystemWriter, FsContentAccessor, TomlMetadataReader,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TagValueFormatter};
    pub use crate::application::dto::{GenerateRequest, GenerateResponse};
    pub use crate::application::use_cases::GenerateSbomUseCase;
    pub use crate::ports::outbound::{
        ContentAccessor, MetadataReader, OutputPresenter, ProgressReporter, RecordSource,
        SbomFormatter,
    };
    pub use crate::sbom::domain::{
        Document, DownloadLocation, InstalledFileRecord, MetadataDescriptor, Package,
        Relationship, RelationshipKind,
    };
    pub use crate::sbom::services::{
        classify, FragmentBuilder, GenReport, IssueCategory, MetadataResolver, PackageClass,
    };
    pub use crate::shared::Result;
}
