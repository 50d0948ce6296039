//! Port definitions implemented by the infrastructure and presentation layers

pub mod document_source;
pub mod progress;

pub use document_source::{DocumentSource, SKILL_FILE_NAME, SourceError};
pub use progress::{NoProgress, ValidationProgressNotifier};
