use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// Abstracts the output destination (file, stdout) where serialized
/// documents and the diagnostics report are written.
pub trait OutputPresenter {
    /// Presents the content to the output destination
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails
    fn present(&self, content: &str) -> Result<()>;
}
