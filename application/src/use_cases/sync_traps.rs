//! Sync Traps use case.
//!
//! Loads the reference parameter documentation, parses it into trap
//! entries, and diffs it against the built-in table. The output feeds
//! the markdown sync report; nothing is written back — updating the
//! built-in table remains a manual step.

use crate::ports::document_source::{DocumentSource, SourceError};
use skillcheck_domain::trap::{ReferenceDoc, TableDiff, TrapTable, diff_against_builtin, parse_traps_doc};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Fatal conditions for a sync run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    #[error("reference traps document not found: {0}")]
    ReferenceDocMissing(PathBuf),

    #[error("failed to read reference traps document: {0}")]
    ReferenceDocUnreadable(String),
}

/// Parsed reference plus its diff against the built-in table.
#[derive(Debug, Clone)]
pub struct SyncOutput {
    pub reference: ReferenceDoc,
    pub diff: TableDiff,
}

/// Use case for comparing the built-in trap table with the reference
/// documentation.
pub struct SyncTrapsUseCase<S: DocumentSource> {
    source: Arc<S>,
    builtin: TrapTable,
}

impl<S: DocumentSource> SyncTrapsUseCase<S> {
    pub fn new(source: Arc<S>, builtin: TrapTable) -> Self {
        Self { source, builtin }
    }

    pub fn execute(&self, traps_doc: &Path) -> Result<SyncOutput, SyncError> {
        let content = self.source.read_document(traps_doc).map_err(|error| match error {
            SourceError::NotFound(path) | SourceError::NotAFile(path) => {
                SyncError::ReferenceDocMissing(path)
            }
            other => SyncError::ReferenceDocUnreadable(other.to_string()),
        })?;

        let reference = parse_traps_doc(&content);
        if reference.is_empty() {
            warn!(
                "reference document {} yielded no servers; check its heading format",
                traps_doc.display()
            );
        }

        let diff = diff_against_builtin(&reference, &self.builtin);
        info!(
            "sync: {} reference tool(s), {} built-in tool(s), {} mismatch(es)",
            diff.reference_tools,
            diff.builtin_tools,
            diff.mismatches.len()
        );

        Ok(SyncOutput { reference, diff })
    }
}
