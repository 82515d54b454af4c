use crate::ports::outbound::ReportFormatter;
use crate::report::domain::{PackageRecord, PackageTable};
use crate::shared::Result;
use chrono::{DateTime, Local};

/// Markdown table header for the per-package rows
const TABLE_HEADER: &str =
    "| Package | License | Description | Installed Version | Latest Version | Update Available | Security Issue |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str =
    "|---------|---------|-------------|-------------------|----------------|------------------|----------------|\n";

/// Descriptions longer than this many characters are truncated
const DESCRIPTION_LIMIT: usize = 50;

/// MarkdownReportFormatter adapter implementing the ReportFormatter port
///
/// Renders the merged table as a Markdown document: title, generation
/// timestamp, one table row per package in insertion order, and a summary
/// section with total/update/advisory counts. Rendering is a pure function
/// of the table and the timestamp.
pub struct MarkdownReportFormatter;

impl MarkdownReportFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Truncates a description to the first 50 characters plus an ellipsis
    /// marker. Descriptions of 50 characters or fewer render verbatim.
    fn truncate_description(text: &str) -> String {
        if text.chars().count() > DESCRIPTION_LIMIT {
            let mut truncated: String = text.chars().take(DESCRIPTION_LIMIT).collect();
            truncated.push_str("...");
            truncated
        } else {
            text.to_string()
        }
    }

    fn yes_no(flag: bool) -> &'static str {
        if flag {
            "Y"
        } else {
            "N"
        }
    }

    fn render_row(&self, output: &mut String, record: &PackageRecord) {
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {} |\n",
            Self::escape_table_cell(&record.name),
            Self::escape_table_cell(&record.license),
            Self::escape_table_cell(&Self::truncate_description(&record.description)),
            Self::escape_table_cell(&record.version),
            Self::escape_table_cell(&record.latest_version),
            Self::yes_no(record.has_update),
            Self::yes_no(record.has_security_issue),
        ));
    }

    fn render_summary(&self, output: &mut String, table: &PackageTable) {
        output.push_str("\n## Summary\n\n");
        output.push_str(&format!("- Total packages: {}\n", table.len()));
        output.push_str(&format!(
            "- Packages needing updates: {}\n",
            table.update_count()
        ));
        output.push_str(&format!(
            "- Packages with security issues: {}\n",
            table.advisory_count()
        ));
    }
}

impl Default for MarkdownReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownReportFormatter {
    fn format(&self, table: &PackageTable, generated_at: DateTime<Local>) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Composer Package Analysis Report\n\n");
        output.push_str(&format!(
            "Generated on: {}\n\n",
            generated_at.format("%Y-%m-%d %H:%M:%S")
        ));

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for record in table.iter() {
            self.render_row(&mut output, record);
        }

        self.render_summary(&mut output, table);

        Ok(output)
    }
}
