use std::collections::HashSet;

use crate::sbom::domain::package::Package;

/// A file node: one installed artifact with its content checksum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub id: String,
    /// Installed path relative to the product output directory
    pub name: String,
    /// `SHA1: <hex>` over the file bytes, or the symlink target text
    pub checksum: String,
}

/// Relationship kinds used in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationshipKind {
    /// File was produced by a package
    GeneratedFrom,
    /// Fork package is a variant of an upstream package or external element
    VariantOf,
}

impl RelationshipKind {
    pub fn as_spdx(self) -> &'static str {
        match self {
            RelationshipKind::GeneratedFrom => "GENERATED_FROM",
            RelationshipKind::VariantOf => "VARIANT_OF",
        }
    }
}

/// A directed, typed edge between two element identifiers. `id2` may name an
/// element in another document as `DocumentRef-...:<element id>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub id1: String,
    pub kind: RelationshipKind,
    pub id2: String,
}

impl Relationship {
    pub fn new(id1: impl Into<String>, kind: RelationshipKind, id2: impl Into<String>) -> Self {
        Self {
            id1: id1.into(),
            kind,
            id2: id2.into(),
        }
    }
}

/// A named pointer to another SBOM document, used when upstream provenance is
/// tracked externally rather than modeled in this document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalDocumentRef {
    pub id: String,
    pub uri: String,
    pub checksum: String,
}

/// The aggregate SBOM document under construction.
///
/// Packages, files, relationships and external references keep insertion
/// order so that repeated runs over identical input serialize byte-for-byte
/// identically. Identifier uniqueness is enforced first-seen-wins: a
/// recurring identifier is the same logical package seen again (e.g. two
/// installed files from one source directory), so the original node stands.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub name: String,
    pub namespace: String,
    pub creators: Vec<String>,
    pub created: String,
    /// Identifier of the primary described element
    pub describes: Option<String>,
    pub packages: Vec<Package>,
    pub files: Vec<File>,
    pub relationships: Vec<Relationship>,
    pub external_refs: Vec<ExternalDocumentRef>,
    seen_package_ids: HashSet<String>,
    seen_external_ref_ids: HashSet<String>,
}

impl Document {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>, creators: Vec<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            creators,
            ..Default::default()
        }
    }

    /// Add a package unless its identifier is already present.
    pub fn add_package(&mut self, package: Package) {
        if self.seen_package_ids.insert(package.id.clone()) {
            self.packages.push(package);
        }
    }

    pub fn add_file(&mut self, file: File) {
        self.files.push(file);
    }

    pub fn add_relationship(&mut self, relationship: Relationship) {
        self.relationships.push(relationship);
    }

    /// Add an external document reference unless already present.
    pub fn add_external_ref(&mut self, external_ref: ExternalDocumentRef) {
        if self.seen_external_ref_ids.insert(external_ref.id.clone()) {
            self.external_refs.push(external_ref);
        }
    }

    pub fn set_describes(&mut self, element_id: impl Into<String>) {
        self.describes = Some(element_id.into());
    }

    /// Mutable access to a package already in the document, used to fill the
    /// product package's deferred file list and verification code.
    pub fn package_mut(&mut self, id: &str) -> Option<&mut Package> {
        self.packages.iter_mut().find(|p| p.id == id)
    }

    /// Check the document invariant: every relationship endpoint resolves to
    /// a package, file, or external document reference already present.
    pub fn resolves_all_relationships(&self) -> bool {
        let mut ids: HashSet<&str> = HashSet::new();
        ids.extend(self.packages.iter().map(|p| p.id.as_str()));
        ids.extend(self.files.iter().map(|f| f.id.as_str()));
        self.relationships.iter().all(|rel| {
            let id2_resolves = match rel.id2.split_once(':') {
                Some((doc_ref, _element)) => self
                    .external_refs
                    .iter()
                    .any(|ext| ext.id == doc_ref),
                None => ids.contains(rel.id2.as_str()),
            };
            ids.contains(rel.id1.as_str()) && id2_resolves
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom::domain::package::DownloadLocation;

    fn package(id: &str, name: &str) -> Package {
        Package {
            id: id.to_string(),
            name: name.to_string(),
            download_location: DownloadLocation::Withheld,
            ..Default::default()
        }
    }

    #[test]
    fn test_add_package_first_seen_wins() {
        let mut doc = Document::default();
        doc.add_package(package("SPDXRef-SOURCE-zlib", "zlib"));
        doc.add_package(package("SPDXRef-SOURCE-zlib", "zlib-second"));
        assert_eq!(doc.packages.len(), 1);
        assert_eq!(doc.packages[0].name, "zlib");
    }

    #[test]
    fn test_add_external_ref_deduplicates() {
        let mut doc = Document::default();
        let ext = ExternalDocumentRef {
            id: "DocumentRef-UPSTREAM-foo".to_string(),
            uri: "https://example.org/foo.spdx".to_string(),
            checksum: "SHA1: abc".to_string(),
        };
        doc.add_external_ref(ext.clone());
        doc.add_external_ref(ext);
        assert_eq!(doc.external_refs.len(), 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut doc = Document::default();
        doc.add_package(package("SPDXRef-B", "b"));
        doc.add_package(package("SPDXRef-A", "a"));
        doc.add_package(package("SPDXRef-C", "c"));
        let ids: Vec<&str> = doc.packages.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["SPDXRef-B", "SPDXRef-A", "SPDXRef-C"]);
    }

    #[test]
    fn test_resolves_all_relationships() {
        let mut doc = Document::default();
        doc.add_package(package("SPDXRef-SOURCE-zlib", "zlib"));
        doc.add_file(File {
            id: "SPDXRef-system-lib-libz.so".to_string(),
            name: "system/lib/libz.so".to_string(),
            checksum: "SHA1: 00".to_string(),
        });
        doc.add_relationship(Relationship::new(
            "SPDXRef-system-lib-libz.so",
            RelationshipKind::GeneratedFrom,
            "SPDXRef-SOURCE-zlib",
        ));
        assert!(doc.resolves_all_relationships());

        doc.add_relationship(Relationship::new(
            "SPDXRef-system-lib-libz.so",
            RelationshipKind::VariantOf,
            "SPDXRef-UPSTREAM-missing",
        ));
        assert!(!doc.resolves_all_relationships());
    }

    #[test]
    fn test_external_relationship_endpoint_resolves_via_doc_ref() {
        let mut doc = Document::default();
        doc.add_package(package("SPDXRef-PREBUILT-foo", "foo"));
        doc.add_external_ref(ExternalDocumentRef {
            id: "DocumentRef-UPSTREAM-foo".to_string(),
            uri: "https://example.org/foo.spdx".to_string(),
            checksum: "SHA1: abc".to_string(),
        });
        doc.add_relationship(Relationship::new(
            "SPDXRef-PREBUILT-foo",
            RelationshipKind::VariantOf,
            "DocumentRef-UPSTREAM-foo:SPDXRef-DOCUMENT",
        ));
        assert!(doc.resolves_all_relationships());
    }

    #[test]
    fn test_package_mut() {
        let mut doc = Document::default();
        doc.add_package(package("SPDXRef-PRODUCT", "PRODUCT"));
        doc.package_mut("SPDXRef-PRODUCT").unwrap().verification_code =
            Some("abc".to_string());
        assert_eq!(
            doc.packages[0].verification_code.as_deref(),
            Some("abc")
        );
    }
}
