//! Plain text report formatter

use super::formatter::ReportFormatter;
use colored::Colorize;
use skillcheck_domain::{CorpusReport, ErrorKind, FileReport};

/// Formats corpus reports for terminal display
pub struct TextFormatter;

impl TextFormatter {
    pub fn format(corpus: &CorpusReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::rule('='));
        output.push_str("MCP Parameter Validation Report\n");
        output.push_str(&Self::rule('='));
        output.push('\n');

        output.push_str(&format!("{}\n", "Overall Statistics:".cyan().bold()));
        output.push_str(&format!(
            "  Total airis-exec calls: {}\n",
            corpus.total_calls()
        ));
        output.push_str(&format!("  Total errors found: {}\n", corpus.total_errors()));
        output.push_str(&format!(
            "  Accuracy: {:.1}%\n\n",
            corpus.overall_accuracy()
        ));

        for (skill_name, report) in corpus.iter() {
            output.push_str(&Self::rule('-'));
            output.push_str(&format!("{} {}\n", "Skill:".bold(), skill_name));
            output.push_str(&Self::file_section(report));
            output.push('\n');
        }

        output.push_str(&Self::rule('='));
        output
    }

    fn file_section(report: &FileReport) -> String {
        let mut output = String::new();

        output.push_str(&format!("  File: {}\n", report.file_path));
        output.push_str(&format!("  Calls: {}\n", report.total_calls));
        output.push_str(&format!("  Errors: {}\n", report.errors.len()));
        output.push_str(&format!("  Accuracy: {:.1}%\n", report.accuracy()));

        if !report.warnings.is_empty() {
            output.push_str("\n  Warnings:\n");
            for warning in &report.warnings {
                output.push_str(&format!("    ⚠️  {}\n", warning));
            }
        }

        if !report.errors.is_empty() {
            output.push_str("\n  Errors:\n");
            for error in &report.errors {
                output.push_str(&format!("    Line {}: {}\n", error.line, error.tool));
                match error.kind {
                    ErrorKind::WrongName => {
                        output.push_str(&format!(
                            "      ❌ Wrong parameter: {}\n",
                            error.wrong_param
                        ));
                        output.push_str(&format!(
                            "      ✅ Correct parameter: {}\n",
                            error.correct_param
                        ));
                    }
                    ErrorKind::MissingRequired => {
                        output.push_str(&format!(
                            "      ⚠️  Missing required: {}\n",
                            error.correct_param
                        ));
                    }
                }
            }
        }

        output
    }

    fn rule(ch: char) -> String {
        format!("{}\n", ch.to_string().repeat(80))
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, corpus: &CorpusReport) -> String {
        Self::format(corpus)
    }
}
