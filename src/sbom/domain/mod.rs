pub mod descriptor;
pub mod document;
pub mod package;
pub mod record;
pub mod spdx_id;

pub use descriptor::{MetadataDescriptor, SbomRef, UrlType};
pub use document::{Document, ExternalDocumentRef, File, Relationship, RelationshipKind};
pub use package::{
    DownloadLocation, ExternalRefCategory, ExternalRefType, Package, PackageExternalRef,
};
pub use record::InstalledFileRecord;
pub use spdx_id::{PackageKind, SPDXID_DOCUMENT, SPDXID_PLATFORM, SPDXID_PRODUCT};
