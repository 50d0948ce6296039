//! Check File Size use case.
//!
//! Counts a file's lines and compares against the editing threshold.
//! The read is lossy: invalid UTF-8 should not prevent a line count.

use crate::ports::document_source::{DocumentSource, SourceError};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Default line-count threshold for editable files.
pub const DEFAULT_MAX_LINES: usize = 2000;

/// Result of a line-count check.
#[derive(Debug, Clone, PartialEq)]
pub struct FileSizeReport {
    pub path: String,
    pub line_count: usize,
    pub size_bytes: usize,
    pub max_lines: usize,
}

impl FileSizeReport {
    pub fn fits(&self) -> bool {
        self.line_count <= self.max_lines
    }

    /// Lines used as a share of the threshold, in percent
    pub fn percent_of_limit(&self) -> f64 {
        self.line_count as f64 / self.max_lines as f64 * 100.0
    }

    /// Lines over the threshold; zero when the file fits
    pub fn overflow(&self) -> usize {
        self.line_count.saturating_sub(self.max_lines)
    }
}

/// Use case for the line-count threshold check.
pub struct CheckFileSizeUseCase<S: DocumentSource> {
    source: Arc<S>,
}

impl<S: DocumentSource> CheckFileSizeUseCase<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    pub fn execute(&self, path: &Path, max_lines: usize) -> Result<FileSizeReport, SourceError> {
        let content = self.source.read_document_lossy(path)?;
        let line_count = content.lines().count();
        debug!("{}: {} line(s)", path.display(), line_count);

        Ok(FileSizeReport {
            path: path.display().to_string(),
            line_count,
            size_bytes: content.len(),
            max_lines,
        })
    }
}
