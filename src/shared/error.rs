use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - a report was written, even if some data sources degraded
    Success = 0,
    /// Application error (composer invocation, output writing, invalid path, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for report generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to run `{command}`: {details}\n\n💡 Hint: verify that the composer executable is installed and on PATH")]
    CommandFailed { command: String, details: String },

    #[error("Unexpected output from `{command}`: {details}\n\n💡 Hint: the command must support JSON output (Composer 2.4 or later for `audit`)")]
    MalformedOutput { command: String, details: String },

    #[error("Could not list installed packages: {details}")]
    ListingUnavailable { details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: point --path at the directory containing composer.json")]
    InvalidProjectPath { path: PathBuf, reason: String },
}
