/// Output formatters
mod markdown_formatter;

pub use markdown_formatter::MarkdownReportFormatter;
