//! Document source port
//!
//! Abstracts file access so use cases stay pure and testable with
//! in-memory doubles. The real adapter lives in the infrastructure
//! layer.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure while accessing a document or the corpus root.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    #[error("not a file: {0}")]
    NotAFile(PathBuf),

    #[error("failed to read {path}: {reason}")]
    Unreadable { path: PathBuf, reason: String },

    #[error("skills directory not found: {0}")]
    MissingRoot(PathBuf),
}

/// Read access to skill documents and the corpus layout.
pub trait DocumentSource {
    /// Read a document as UTF-8. Invalid encoding is an error.
    fn read_document(&self, path: &Path) -> Result<String, SourceError>;

    /// Read a document, replacing invalid UTF-8 sequences instead of
    /// failing. Used for plain line counting where exact bytes do not
    /// matter.
    fn read_document_lossy(&self, path: &Path) -> Result<String, SourceError>;

    /// Enumerate `(skill_name, document_path)` pairs under `root`: one
    /// entry per immediate subdirectory containing the designated skill
    /// file. Subdirectories without it are skipped silently.
    fn list_skill_documents(&self, root: &Path) -> Result<Vec<(String, PathBuf)>, SourceError>;
}

/// The designated per-skill document name.
pub const SKILL_FILE_NAME: &str = "SKILL.md";
