//! Parameter trap table: entities, built-in data, validation, and sync diffing

pub mod builtin;
pub mod diff;
pub mod doc_parser;
pub mod entities;
pub mod traits;

pub use diff::{ParamMismatch, TableDiff, diff_against_builtin};
pub use doc_parser::{ReferenceDoc, ReferenceTool, parse_traps_doc};
pub use entities::{TrapEntry, TrapTable};
pub use traits::{ParamValidator, TableValidator};
