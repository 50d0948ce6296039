//! Filesystem adapters

pub mod local_source;

pub use local_source::LocalDocumentSource;
