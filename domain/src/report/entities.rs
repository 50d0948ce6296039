//! Validation report entities
//!
//! The output side of the validation pipeline: one [`ParamError`] per
//! detected issue, accumulated into a per-file [`FileReport`] and a
//! corpus-wide [`CorpusReport`]. All accuracy figures use the same rule:
//! a report with zero calls is 100% accurate by definition.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Kind of parameter issue detected in a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A known-wrong parameter name was used
    WrongName,
    /// A required parameter was not provided
    MissingRequired,
}

impl ErrorKind {
    pub fn as_str(&self) -> &str {
        match self {
            ErrorKind::WrongName => "wrong_name",
            ErrorKind::MissingRequired => "missing_required",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One parameter validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamError {
    pub kind: ErrorKind,
    pub file_path: String,
    pub line: usize,
    pub tool: String,
    /// The offending name; empty for missing-required errors
    pub wrong_param: String,
    /// Suggested name(s): the full accepted list for wrong-name errors,
    /// the missing name for missing-required errors
    pub correct_param: String,
    /// Leading slice of the originating code block
    pub snippet: String,
}

impl ParamError {
    pub fn wrong_name(
        file_path: impl Into<String>,
        line: usize,
        tool: impl Into<String>,
        wrong: impl Into<String>,
        suggestions: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            kind: ErrorKind::WrongName,
            file_path: file_path.into(),
            line,
            tool: tool.into(),
            wrong_param: wrong.into(),
            correct_param: suggestions.into(),
            snippet: snippet.into(),
        }
    }

    pub fn missing_required(
        file_path: impl Into<String>,
        line: usize,
        tool: impl Into<String>,
        missing: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            kind: ErrorKind::MissingRequired,
            file_path: file_path.into(),
            line,
            tool: tool.into(),
            wrong_param: String::new(),
            correct_param: missing.into(),
            snippet: snippet.into(),
        }
    }
}

/// Validation results for a single skill document.
#[derive(Debug, Clone, Default)]
pub struct FileReport {
    pub file_path: String,
    pub total_calls: usize,
    pub errors: Vec<ParamError>,
    /// Non-fatal conditions, e.g. an unreadable file
    pub warnings: Vec<String>,
}

impl FileReport {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            ..Default::default()
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Share of calls without a detected error, as a percentage.
    /// A document with no calls is fully accurate.
    pub fn accuracy(&self) -> f64 {
        if self.total_calls == 0 {
            return 100.0;
        }
        (self.total_calls as f64 - self.errors.len() as f64) / self.total_calls as f64 * 100.0
    }
}

/// Aggregated validation results for a skill corpus, keyed by skill name.
#[derive(Debug, Clone, Default)]
pub struct CorpusReport {
    reports: BTreeMap<String, FileReport>,
}

impl CorpusReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a corpus report from a single file's result.
    pub fn single(name: impl Into<String>, report: FileReport) -> Self {
        let mut corpus = Self::new();
        corpus.insert(name, report);
        corpus
    }

    pub fn insert(&mut self, name: impl Into<String>, report: FileReport) {
        self.reports.insert(name.into(), report);
    }

    /// Reports in skill-name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FileReport)> {
        self.reports.iter().map(|(name, report)| (name.as_str(), report))
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn total_calls(&self) -> usize {
        self.reports.values().map(|r| r.total_calls).sum()
    }

    pub fn total_errors(&self) -> usize {
        self.reports.values().map(|r| r.errors.len()).sum()
    }

    pub fn total_warnings(&self) -> usize {
        self.reports.values().map(|r| r.warnings.len()).sum()
    }

    pub fn has_errors(&self) -> bool {
        self.total_errors() > 0
    }

    /// Corpus-wide accuracy, with the same zero-call rule as [`FileReport`].
    pub fn overall_accuracy(&self) -> f64 {
        let calls = self.total_calls();
        if calls == 0 {
            return 100.0;
        }
        (calls as f64 - self.total_errors() as f64) / calls as f64 * 100.0
    }
}
