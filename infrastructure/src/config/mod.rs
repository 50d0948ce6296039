//! Configuration loading

pub mod file_config;
pub mod loader;

pub use file_config::{FileConfig, LimitsConfig, OutputConfig, PathsConfig};
pub use loader::ConfigLoader;
