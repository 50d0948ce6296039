//! Report formatter trait

use skillcheck_domain::{CorpusReport, OutputFormat};

/// Renders a corpus report into its final textual form.
pub trait ReportFormatter {
    fn format(&self, corpus: &CorpusReport) -> String;
}

/// Pick the formatter for an output format.
pub fn formatter_for(format: OutputFormat) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(super::text::TextFormatter),
        OutputFormat::Markdown => Box::new(super::markdown::MarkdownFormatter),
        OutputFormat::Json => Box::new(super::json::JsonFormatter),
    }
}
