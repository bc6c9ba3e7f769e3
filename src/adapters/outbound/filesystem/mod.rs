mod content_accessor;
mod csv_records;
mod file_writer;
mod metadata_reader;

pub use content_accessor::FsContentAccessor;
pub use csv_records::CsvRecordSource;
pub use file_writer::FileSystemWriter;
pub use metadata_reader::TomlMetadataReader;
