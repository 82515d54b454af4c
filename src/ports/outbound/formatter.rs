use crate::report::domain::PackageTable;
use crate::shared::Result;
use chrono::{DateTime, Local};

/// ReportFormatter port for rendering the merged table
///
/// Implementations must be pure: the same table and timestamp always
/// produce byte-identical output.
pub trait ReportFormatter {
    /// Renders the final report document.
    ///
    /// # Arguments
    /// * `table` - The fully merged package table
    /// * `generated_at` - Timestamp to stamp into the report header
    fn format(&self, table: &PackageTable, generated_at: DateTime<Local>) -> Result<String>;
}
