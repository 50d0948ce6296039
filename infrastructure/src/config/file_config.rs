//! Configuration file schema
//!
//! Sections mirror the TOML layout:
//!
//! ```toml
//! [paths]
//! skills_dir = "skills"
//! traps_doc = "../ai_workflow/docs/airis-mcp-gateway/PARAMETER_TRAPS.md"
//!
//! [output]
//! format = "text"
//!
//! [limits]
//! max_file_lines = 2000
//! ```

use serde::{Deserialize, Serialize};
use skillcheck_domain::OutputFormat;
use std::path::PathBuf;

/// Top-level configuration file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FileConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Where the skill corpus and the reference traps document live.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathsConfig {
    /// Root directory containing one subdirectory per skill
    #[serde(default = "default_skills_dir")]
    pub skills_dir: PathBuf,
    /// Reference parameter documentation, conventionally in a sibling
    /// checkout
    #[serde(default = "default_traps_doc")]
    pub traps_doc: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            skills_dir: default_skills_dir(),
            traps_doc: default_traps_doc(),
        }
    }
}

fn default_skills_dir() -> PathBuf {
    PathBuf::from("skills")
}

fn default_traps_doc() -> PathBuf {
    PathBuf::from("../ai_workflow/docs/airis-mcp-gateway/PARAMETER_TRAPS.md")
}

/// Report rendering defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Size thresholds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LimitsConfig {
    /// Maximum line count considered editable
    #[serde(default = "default_max_file_lines")]
    pub max_file_lines: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_file_lines: default_max_file_lines(),
        }
    }
}

fn default_max_file_lines() -> usize {
    2000
}
