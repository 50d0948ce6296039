//! Validate Corpus use case.
//!
//! Enumerates the skill directories under a root, validates each
//! designated document, and aggregates the per-file reports. A missing
//! skills directory is the one fatal condition; everything else is
//! accumulated and reported.

use crate::ports::document_source::{DocumentSource, SourceError};
use crate::ports::progress::ValidationProgressNotifier;
use crate::use_cases::validate_skill::ValidateSkillUseCase;
use skillcheck_domain::{CorpusReport, TrapTable};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Fatal conditions for a corpus run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CorpusError {
    #[error("skills directory not found: {0}")]
    SkillsDirNotFound(PathBuf),

    #[error("failed to enumerate skills: {0}")]
    EnumerationFailed(String),
}

impl From<SourceError> for CorpusError {
    fn from(error: SourceError) -> Self {
        match error {
            SourceError::MissingRoot(path) => CorpusError::SkillsDirNotFound(path),
            other => CorpusError::EnumerationFailed(other.to_string()),
        }
    }
}

/// Use case for validating every skill under a corpus root.
pub struct ValidateCorpusUseCase<S: DocumentSource> {
    source: Arc<S>,
    skill_use_case: ValidateSkillUseCase<S>,
}

impl<S: DocumentSource> ValidateCorpusUseCase<S> {
    pub fn new(source: Arc<S>, table: TrapTable) -> Self {
        Self {
            skill_use_case: ValidateSkillUseCase::new(Arc::clone(&source), table),
            source,
        }
    }

    /// Validate all skills under `root`, reporting progress per file.
    pub fn execute(
        &self,
        root: &Path,
        progress: &dyn ValidationProgressNotifier,
    ) -> Result<CorpusReport, CorpusError> {
        let documents = self.source.list_skill_documents(root)?;
        info!("validating {} skill document(s) under {}", documents.len(), root.display());

        progress.on_corpus_start(documents.len());

        let mut corpus = CorpusReport::new();
        for (skill_name, path) in documents {
            let report = self.skill_use_case.execute(&path);
            progress.on_file_complete(&skill_name, &report);
            corpus.insert(skill_name, report);
        }

        progress.on_corpus_complete();
        Ok(corpus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use std::collections::HashMap;

    /// In-memory corpus: readable docs plus paths that fail to read
    struct MemoryCorpus {
        root: PathBuf,
        docs: Vec<(String, PathBuf, Option<String>)>,
    }

    impl DocumentSource for MemoryCorpus {
        fn read_document(&self, path: &Path) -> Result<String, SourceError> {
            for (_, doc_path, content) in &self.docs {
                if doc_path == path {
                    return match content {
                        Some(content) => Ok(content.clone()),
                        None => Err(SourceError::Unreadable {
                            path: path.to_path_buf(),
                            reason: "invalid utf-8".to_string(),
                        }),
                    };
                }
            }
            Err(SourceError::NotFound(path.to_path_buf()))
        }

        fn read_document_lossy(&self, path: &Path) -> Result<String, SourceError> {
            self.read_document(path)
        }

        fn list_skill_documents(
            &self,
            root: &Path,
        ) -> Result<Vec<(String, PathBuf)>, SourceError> {
            if root != self.root {
                return Err(SourceError::MissingRoot(root.to_path_buf()));
            }
            Ok(self
                .docs
                .iter()
                .map(|(name, path, _)| (name.clone(), path.clone()))
                .collect())
        }
    }

    const BROKEN_DOC: &str = r#"```typescript
airis-exec({ tool: "serena:read_memory", arguments: { path: "a.md" } })
```
"#;

    const CLEAN_DOC: &str = r#"```typescript
airis-exec({ tool: "serena:read_memory", arguments: { memory_file_name: "a.md" } })
```
"#;

    fn corpus_source() -> Arc<MemoryCorpus> {
        Arc::new(MemoryCorpus {
            root: PathBuf::from("skills"),
            docs: vec![
                (
                    "broken".to_string(),
                    PathBuf::from("skills/broken/SKILL.md"),
                    Some(BROKEN_DOC.to_string()),
                ),
                (
                    "clean".to_string(),
                    PathBuf::from("skills/clean/SKILL.md"),
                    Some(CLEAN_DOC.to_string()),
                ),
                (
                    "unreadable".to_string(),
                    PathBuf::from("skills/unreadable/SKILL.md"),
                    None,
                ),
            ],
        })
    }

    #[test]
    fn test_corpus_aggregates_errors_and_warnings() {
        let use_case = ValidateCorpusUseCase::new(corpus_source(), TrapTable::builtin());
        let corpus = use_case
            .execute(Path::new("skills"), &NoProgress)
            .unwrap();

        assert_eq!(corpus.len(), 3);
        // "broken" contributes a wrong-name and a missing-required error
        assert_eq!(corpus.total_errors(), 2);
        assert_eq!(corpus.total_warnings(), 1);
        assert_eq!(corpus.total_calls(), 2);
        assert_eq!(
            corpus.overall_accuracy(),
            (2.0 - 2.0) / 2.0 * 100.0
        );
    }

    #[test]
    fn test_unreadable_file_not_fatal() {
        let use_case = ValidateCorpusUseCase::new(corpus_source(), TrapTable::builtin());
        let corpus = use_case
            .execute(Path::new("skills"), &NoProgress)
            .unwrap();

        let (_, unreadable) = corpus.iter().find(|(name, _)| *name == "unreadable").unwrap();
        assert_eq!(unreadable.total_calls, 0);
        assert_eq!(unreadable.warnings.len(), 1);
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let use_case = ValidateCorpusUseCase::new(corpus_source(), TrapTable::builtin());
        let error = use_case
            .execute(Path::new("nonexistent"), &NoProgress)
            .unwrap_err();

        assert_eq!(
            error,
            CorpusError::SkillsDirNotFound(PathBuf::from("nonexistent"))
        );
    }

    #[test]
    fn test_reports_keyed_and_ordered_by_skill_name() {
        let use_case = ValidateCorpusUseCase::new(corpus_source(), TrapTable::builtin());
        let corpus = use_case
            .execute(Path::new("skills"), &NoProgress)
            .unwrap();

        let names: Vec<&str> = corpus.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["broken", "clean", "unreadable"]);
    }
}
