//! JSON report formatter
//!
//! Output shape:
//!
//! ```json
//! {
//!   "overall": { "total_calls": 3, "total_errors": 1, "accuracy": 66.7 },
//!   "skills": {
//!     "research": {
//!       "file_path": "skills/research/SKILL.md",
//!       "total_calls": 3,
//!       "errors": [
//!         { "line": 31, "tool": "tavily:search", "wrong_param": "q",
//!           "correct_param": "query", "error_type": "wrong_name" }
//!       ],
//!       "warnings": [],
//!       "accuracy": 66.7
//!     }
//!   }
//! }
//! ```

use super::formatter::ReportFormatter;
use serde_json::{Map, Value, json};
use skillcheck_domain::{CorpusReport, FileReport};

/// Formats corpus reports as a JSON document
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn format(corpus: &CorpusReport) -> String {
        let mut skills = Map::new();
        for (skill_name, report) in corpus.iter() {
            skills.insert(skill_name.to_string(), Self::file_value(report));
        }

        let output = json!({
            "overall": {
                "total_calls": corpus.total_calls(),
                "total_errors": corpus.total_errors(),
                "accuracy": corpus.overall_accuracy(),
            },
            "skills": Value::Object(skills),
        });

        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }

    fn file_value(report: &FileReport) -> Value {
        let errors: Vec<Value> = report
            .errors
            .iter()
            .map(|error| {
                json!({
                    "line": error.line,
                    "tool": error.tool,
                    "wrong_param": error.wrong_param,
                    "correct_param": error.correct_param,
                    "error_type": error.kind,
                })
            })
            .collect();

        json!({
            "file_path": report.file_path,
            "total_calls": report.total_calls,
            "errors": errors,
            "warnings": report.warnings,
            "accuracy": report.accuracy(),
        })
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, corpus: &CorpusReport) -> String {
        Self::format(corpus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillcheck_domain::ParamError;

    #[test]
    fn test_overall_accuracy_is_exactly_hundred_for_empty_corpus() {
        let output = JsonFormatter::format(&CorpusReport::new());
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["overall"]["total_calls"], 0);
        assert_eq!(value["overall"]["accuracy"], 100.0);
    }

    #[test]
    fn test_error_entry_shape() {
        let mut report = FileReport::new("skills/a/SKILL.md");
        report.total_calls = 2;
        report.errors.push(ParamError::wrong_name(
            "skills/a/SKILL.md",
            7,
            "serena:read_memory",
            "path",
            "memory_file_name",
            "",
        ));

        let output = JsonFormatter::format(&CorpusReport::single("a", report));
        let value: Value = serde_json::from_str(&output).unwrap();

        let error = &value["skills"]["a"]["errors"][0];
        assert_eq!(error["line"], 7);
        assert_eq!(error["tool"], "serena:read_memory");
        assert_eq!(error["wrong_param"], "path");
        assert_eq!(error["correct_param"], "memory_file_name");
        assert_eq!(error["error_type"], "wrong_name");

        assert_eq!(value["overall"]["total_errors"], 1);
        assert_eq!(value["skills"]["a"]["accuracy"], 50.0);
    }

    #[test]
    fn test_missing_required_error_type() {
        let mut report = FileReport::new("skills/b/SKILL.md");
        report.total_calls = 1;
        report.errors.push(ParamError::missing_required(
            "skills/b/SKILL.md",
            3,
            "serena:write_memory",
            "content",
            "",
        ));

        let output = JsonFormatter::format(&CorpusReport::single("b", report));
        let value: Value = serde_json::from_str(&output).unwrap();

        let error = &value["skills"]["b"]["errors"][0];
        assert_eq!(error["error_type"], "missing_required");
        assert_eq!(error["wrong_param"], "");
        assert_eq!(error["correct_param"], "content");
    }

    #[test]
    fn test_warnings_listed_per_skill() {
        let mut report = FileReport::new("skills/c/SKILL.md");
        report.warnings.push("Failed to read file: oops".to_string());

        let output = JsonFormatter::format(&CorpusReport::single("c", report));
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["skills"]["c"]["warnings"][0], "Failed to read file: oops");
        assert_eq!(value["skills"]["c"]["total_calls"], 0);
        assert_eq!(value["skills"]["c"]["accuracy"], 100.0);
    }
}
