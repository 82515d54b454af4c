/// Request DTO for report generation.
#[derive(Debug, Clone, Default)]
pub struct ReportRequest {
    /// When true, a failure of the listing source aborts the run instead of
    /// producing an empty report. Enrichment-source failures always degrade.
    pub strict_listing: bool,
}

impl ReportRequest {
    pub fn new(strict_listing: bool) -> Self {
        Self { strict_listing }
    }
}
