/// Outbound ports (driven ports) - infrastructure interfaces
///
/// These ports define the interfaces the application core uses to interact
/// with external collaborators (metadata stream, source tree, installed
/// files, output destinations).
pub mod content_accessor;
pub mod formatter;
pub mod metadata_reader;
pub mod output_presenter;
pub mod progress_reporter;
pub mod record_source;

pub use content_accessor::ContentAccessor;
pub use formatter::SbomFormatter;
pub use metadata_reader::MetadataReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use record_source::RecordSource;
