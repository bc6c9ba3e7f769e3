/// ProgressReporter port for reporting progress during a run
///
/// Abstracts progress reporting (e.g. to stderr) so stdout stays clean for
/// piped output.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);
}
