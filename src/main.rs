mod adapters;
mod application;
mod cli;
mod ports;
mod sbom;
mod shared;

use std::process;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::{
    CsvRecordSource, FileSystemWriter, FsContentAccessor, TomlMetadataReader,
};
use adapters::outbound::formatters::{JsonFormatter, TagValueFormatter};
use application::dto::GenerateRequest;
use application::use_cases::GenerateSbomUseCase;
use cli::Args;
use ports::outbound::{OutputPresenter, SbomFormatter};
use shared::error::ExitCode;
use shared::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("Caused by: {}", err);
            source = err.source();
        }

        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    let args = Args::parse_args();

    let request = GenerateRequest::new(
        &args.metadata,
        &args.product_out_dir,
        &args.build_version,
        &args.product_mfr,
        &args.output_file,
    );

    let mut use_case = GenerateSbomUseCase::new(
        CsvRecordSource::new(),
        TomlMetadataReader::new("."),
        FsContentAccessor::new(&args.product_out_dir),
        StderrProgressReporter::new(args.verbose),
    );

    if args.unbundled {
        let response = use_case.execute_unbundled(&request)?;
        let output = TagValueFormatter::fragment().format(&response.document)?;
        FileSystemWriter::new(args.output_file.clone()).present(&output)?;
        return Ok(());
    }

    let response = use_case.execute(&request)?;

    let output = TagValueFormatter::new().format(&response.document)?;
    FileSystemWriter::new(args.output_file.clone()).present(&output)?;

    if args.json {
        let json_output = JsonFormatter::new().format(&response.document)?;
        FileSystemWriter::new(args.json_output_path()).present(&json_output)?;
    }

    let mut report_buf = Vec::new();
    response.report.write_to(&mut report_buf)?;
    FileSystemWriter::new(args.report_path()).present(&String::from_utf8(report_buf)?)?;

    Ok(())
}
