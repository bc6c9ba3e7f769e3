use crate::sbom::domain::Document;
use crate::shared::Result;

/// SbomFormatter port for serializing the assembled document
///
/// Both encodings (tag-value text and JSON) carry the same logical content;
/// the choice is a formatting detail of the output surface.
pub trait SbomFormatter {
    /// Serializes the document
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, document: &Document) -> Result<String>;
}
