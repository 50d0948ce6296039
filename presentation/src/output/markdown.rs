//! Markdown report formatter

use super::formatter::ReportFormatter;
use skillcheck_domain::{CorpusReport, ErrorKind};

/// Formats corpus reports as markdown, suitable for committing as a
/// VALIDATION.md document
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn format(corpus: &CorpusReport) -> String {
        let mut lines: Vec<String> = Vec::new();

        lines.push("# MCP Parameter Validation Report".to_string());
        lines.push(String::new());

        lines.push("## Overall Statistics".to_string());
        lines.push(String::new());
        lines.push(format!(
            "- **Total airis-exec calls**: {}",
            corpus.total_calls()
        ));
        lines.push(format!("- **Total errors found**: {}", corpus.total_errors()));
        lines.push(format!("- **Accuracy**: {:.1}%", corpus.overall_accuracy()));
        lines.push(String::new());

        lines.push("## Per-Skill Results".to_string());
        lines.push(String::new());
        lines.push("| Skill | Calls | Errors | Accuracy | Status |".to_string());
        lines.push("|-------|-------|--------|----------|--------|".to_string());

        for (skill_name, report) in corpus.iter() {
            let status = if report.is_valid() { "✅" } else { "❌" };
            lines.push(format!(
                "| {} | {} | {} | {:.1}% | {} |",
                skill_name,
                report.total_calls,
                report.errors.len(),
                report.accuracy(),
                status
            ));
        }
        lines.push(String::new());

        // Detailed sections for skills with findings
        for (skill_name, report) in corpus.iter() {
            if report.errors.is_empty() && report.warnings.is_empty() {
                continue;
            }

            lines.push(format!("### {}", skill_name));
            lines.push(String::new());
            lines.push(format!("**File**: `{}`", report.file_path));
            lines.push(String::new());

            for warning in &report.warnings {
                lines.push(format!("- ⚠️ {}", warning));
                lines.push(String::new());
            }

            for error in &report.errors {
                lines.push(format!("**Line {}**: `{}`", error.line, error.tool));
                match error.kind {
                    ErrorKind::WrongName => {
                        lines.push(format!("- ❌ Wrong parameter: `{}`", error.wrong_param));
                        lines.push(format!("- ✅ Correct parameter: `{}`", error.correct_param));
                    }
                    ErrorKind::MissingRequired => {
                        lines.push(format!("- ⚠️ Missing required: `{}`", error.correct_param));
                    }
                }
                lines.push(String::new());
            }
        }

        lines.join("\n")
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, corpus: &CorpusReport) -> String {
        Self::format(corpus)
    }
}
