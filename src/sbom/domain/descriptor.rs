use serde::Deserialize;

/// Parsed supply-chain metadata for one source directory, read from the
/// directory's METADATA file. Identity is the owning directory; a descriptor
/// is parsed once per run and never mutated afterwards.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct MetadataDescriptor {
    /// Declared package name
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub third_party: ThirdParty,
}

/// The `[third_party]` table of a METADATA file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ThirdParty {
    /// Upstream version of the packaged code
    #[serde(default)]
    pub version: Option<String>,
    /// Upstream homepage, preferred over typed URL entries
    #[serde(default)]
    pub homepage: Option<String>,
    /// Typed upstream URLs in declaration order
    #[serde(default)]
    pub url: Vec<UrlEntry>,
    #[serde(default)]
    pub security: Security,
    /// Reference to an externally tracked SBOM for prebuilt packages
    #[serde(default)]
    pub sbom_ref: Option<SbomRef>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UrlEntry {
    #[serde(rename = "type")]
    pub url_type: UrlType,
    pub value: String,
}

/// URL kinds, ordered so that HOMEPAGE sorts first. Download-location
/// selection relies on this ordering.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum UrlType {
    Homepage,
    Archive,
    Git,
    Svn,
    Hg,
    Darcs,
    Piper,
    Other,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Security {
    /// Security tags; recognized syntax is the `NVD-CPE2.3:` prefix scheme
    #[serde(default)]
    pub tag: Vec<String>,
}

/// Pointer to an upstream SBOM document maintained outside this build.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SbomRef {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub checksum: String,
    #[serde(default)]
    pub element_id: String,
}

impl MetadataDescriptor {
    /// Upstream homepage: the explicit `homepage` field, else the first URL
    /// entry typed HOMEPAGE.
    pub fn homepage(&self) -> Option<&str> {
        if let Some(homepage) = self.third_party.homepage.as_deref() {
            if !homepage.is_empty() {
                return Some(homepage);
            }
        }
        self.third_party
            .url
            .iter()
            .find(|u| u.url_type == UrlType::Homepage)
            .map(|u| u.value.as_str())
    }

    /// Upstream code location: the lowest-typed URL that is not the homepage,
    /// falling back to the second URL when the first is the homepage.
    pub fn download_location(&self) -> Option<&str> {
        if self.third_party.url.is_empty() {
            return None;
        }
        let mut urls: Vec<&UrlEntry> = self.third_party.url.iter().collect();
        urls.sort_by_key(|u| u.url_type);
        if urls[0].url_type != UrlType::Homepage {
            Some(urls[0].value.as_str())
        } else if urls.len() > 1 {
            Some(urls[1].value.as_str())
        } else {
            None
        }
    }

    /// Whether the externally tracked SBOM reference is fully populated.
    pub fn complete_sbom_ref(&self) -> Option<&SbomRef> {
        self.third_party.sbom_ref.as_ref().filter(|sbom_ref| {
            !sbom_ref.url.is_empty()
                && !sbom_ref.checksum.is_empty()
                && !sbom_ref.element_id.is_empty()
        })
    }
}
