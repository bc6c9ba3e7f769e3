use crate::ports::outbound::ProgressReporter;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writes progress information to stderr so it doesn't interfere with
/// stdout output. Chatter is gated by the verbose flag; the batch runs
/// silently otherwise.
pub struct StderrProgressReporter {
    verbose: bool,
}

impl StderrProgressReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if self.verbose {
            eprintln!("{}", message);
        }
    }
}
