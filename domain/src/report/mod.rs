//! Validation report entities

pub mod entities;

pub use entities::{CorpusReport, ErrorKind, FileReport, ParamError};
