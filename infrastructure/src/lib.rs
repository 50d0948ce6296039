//! Infrastructure layer for skillcheck
//!
//! This crate contains the adapters that implement the ports defined
//! in the application layer: local filesystem access and configuration
//! file loading.

pub mod config;
pub mod fs;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, LimitsConfig, OutputConfig, PathsConfig};
pub use fs::LocalDocumentSource;
