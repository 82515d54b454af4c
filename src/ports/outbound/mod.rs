/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (package manager subprocess,
/// file system, console).
pub mod formatter;
pub mod output_presenter;
pub mod package_data_source;
pub mod progress_reporter;

pub use formatter::ReportFormatter;
pub use output_presenter::OutputPresenter;
pub use package_data_source::PackageDataSource;
pub use progress_reporter::ProgressReporter;
