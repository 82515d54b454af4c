//! composer-report - Composer dependency report tool
//!
//! Shells out to Composer subcommands, merges their JSON outputs by package
//! name, and renders a Markdown report of installed packages, licenses,
//! available updates, and known security advisories.
//!
//! # Architecture
//!
//! - **Domain Layer** (`report`): the package table and the merge passes
//! - **Application Layer** (`application`): the report-building use case
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): composer subprocess, formatters, output
//! - **Shared** (`shared`): common error types and the `Result` alias
//!
//! # Example
//!
//! ```no_run
//! use composer_report::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let data_source = ComposerCli::new(PathBuf::from("composer"), PathBuf::from("."));
//! let progress_reporter = StderrProgressReporter::new();
//!
//! let use_case = BuildReportUseCase::new(data_source, progress_reporter);
//! let response = use_case.execute(ReportRequest::new(false))?;
//!
//! let formatter = MarkdownReportFormatter::new();
//! let report = formatter.format(&response.table, response.generated_at)?;
//! println!("{}", report);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod ports;
pub mod report;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::composer::ComposerCli;
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::MarkdownReportFormatter;
    pub use crate::application::dto::{ReportRequest, ReportResponse};
    pub use crate::application::use_cases::BuildReportUseCase;
    pub use crate::ports::outbound::{
        OutputPresenter, PackageDataSource, ProgressReporter, ReportFormatter,
    };
    pub use crate::report::domain::{
        InstalledPackage, LicenseMap, OutdatedEntry, PackageRecord, PackageTable,
    };
    pub use crate::report::services::merge;
    pub use crate::shared::Result;
}
