use composer_report::cli::Args;
use composer_report::prelude::*;
use composer_report::shared::error::{ExitCode, ReportError};
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("Error: {:#}", e);
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let project_dir = args.path.as_deref().unwrap_or(".");
    let project_path = PathBuf::from(project_dir);

    validate_project_path(&project_path)?;

    // Create adapters (Dependency Injection)
    let data_source = ComposerCli::new(PathBuf::from(&args.composer), project_path);
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = BuildReportUseCase::new(data_source, progress_reporter);
    let response = use_case.execute(ReportRequest::new(args.strict))?;

    let formatter = MarkdownReportFormatter::new();
    let report = formatter.format(&response.table, response.generated_at)?;

    let presenter: Box<dyn OutputPresenter> = match args.output {
        Some(output_path) => Box::new(FileSystemWriter::new(PathBuf::from(output_path))),
        None => Box::new(StdoutPresenter::new()),
    };

    presenter.present(&report)?;

    Ok(())
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ReportError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(ReportError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
