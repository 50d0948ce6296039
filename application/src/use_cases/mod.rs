//! Application use cases

pub mod check_file_size;
pub mod sync_traps;
pub mod validate_corpus;
pub mod validate_skill;

pub use check_file_size::{CheckFileSizeUseCase, DEFAULT_MAX_LINES, FileSizeReport};
pub use sync_traps::{SyncError, SyncOutput, SyncTrapsUseCase};
pub use validate_corpus::{CorpusError, ValidateCorpusUseCase};
pub use validate_skill::{ValidateSkillUseCase, validate_content};
