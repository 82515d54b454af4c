use crate::report::domain::PackageTable;
use chrono::{DateTime, Local};

/// Response DTO carrying the merged table and generation metadata.
#[derive(Debug, Clone)]
pub struct ReportResponse {
    /// The fully merged package table, ready for rendering.
    pub table: PackageTable,
    /// Advisory names that matched no installed package. Kept for
    /// accounting; they do not appear in the rendered table.
    pub unlisted_advisories: Vec<String>,
    /// Timestamp stamped into the report header.
    pub generated_at: DateTime<Local>,
}

impl ReportResponse {
    pub fn new(
        table: PackageTable,
        unlisted_advisories: Vec<String>,
        generated_at: DateTime<Local>,
    ) -> Self {
        Self {
            table,
            unlisted_advisories,
            generated_at,
        }
    }
}
