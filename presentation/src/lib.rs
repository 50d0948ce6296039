//! Presentation layer for skillcheck
//!
//! This crate contains the CLI definitions, report formatters, and the
//! progress reporter.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, FormatArg};
pub use output::{
    JsonFormatter, MarkdownFormatter, ReportFormatter, SizeReportRenderer, SyncReportRenderer,
    TextFormatter, formatter_for,
};
pub use progress::ProgressReporter;
