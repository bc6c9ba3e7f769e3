//! Stable SPDX identifier construction.
//!
//! SPDX identifiers are restricted to `A-Za-z0-9.-`, so arbitrary package
//! names and install paths are mapped into that charset deterministically.

/// Well-known identifier of the top-level product package.
pub const SPDXID_PRODUCT: &str = "SPDXRef-PRODUCT";
/// Well-known identifier of the catch-all first-party platform package.
pub const SPDXID_PLATFORM: &str = "SPDXRef-PLATFORM";
/// Identifier of the document itself.
pub const SPDXID_DOCUMENT: &str = "SPDXRef-DOCUMENT";

/// Fork-package kinds that participate in identifier construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageKind {
    Source,
    Upstream,
    Prebuilt,
}

impl PackageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PackageKind::Source => "SOURCE",
            PackageKind::Upstream => "UPSTREAM",
            PackageKind::Prebuilt => "PREBUILT",
        }
    }
}

/// Encode an arbitrary string for use inside an SPDX identifier.
///
/// Alphanumerics and `.`/`-` pass through, `_`/`@`/`/` map to `-`, anything
/// else becomes `0x` plus the hex of its UTF-8 bytes. Leading `-` characters
/// are stripped since identifiers must not start with one. Total over any
/// input and idempotent on already-restricted strings.
pub fn encode_for_spdx_id(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
            result.push(c);
        } else if c == '_' || c == '@' || c == '/' {
            result.push('-');
        } else {
            let mut buf = [0u8; 4];
            result.push_str("0x");
            result.push_str(&hex::encode(c.encode_utf8(&mut buf).as_bytes()));
        }
    }
    result.trim_start_matches('-').to_string()
}

/// Identifier for a fork/upstream/prebuilt package node.
pub fn package_id(package_name: &str, kind: PackageKind) -> String {
    format!("SPDXRef-{}-{}", kind.as_str(), encode_for_spdx_id(package_name))
}

/// Identifier for an installed file node.
pub fn file_id(file_path: &str) -> String {
    format!("SPDXRef-{}", encode_for_spdx_id(file_path))
}

/// Identifier for an external document reference to an upstream SBOM.
pub fn doc_ref_id(package_name: &str) -> String {
    format!(
        "DocumentRef-{}-{}",
        PackageKind::Upstream.as_str(),
        encode_for_spdx_id(package_name)
    )
}
