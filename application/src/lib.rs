//! Application layer for skillcheck
//!
//! This crate contains the use cases and the ports they depend on.
//! It depends only on the domain layer; file access arrives through the
//! [`DocumentSource`] port so every pipeline is testable in memory.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    document_source::{DocumentSource, SKILL_FILE_NAME, SourceError},
    progress::{NoProgress, ValidationProgressNotifier},
};
pub use use_cases::{
    check_file_size::{CheckFileSizeUseCase, DEFAULT_MAX_LINES, FileSizeReport},
    sync_traps::{SyncError, SyncOutput, SyncTrapsUseCase},
    validate_corpus::{CorpusError, ValidateCorpusUseCase},
    validate_skill::{ValidateSkillUseCase, validate_content},
};
