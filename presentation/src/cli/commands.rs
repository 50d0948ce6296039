//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use skillcheck_domain::OutputFormat;
use std::path::PathBuf;

/// Output format for validation reports
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// Plain text summary
    Text,
    /// Markdown with per-file detail sections
    Markdown,
    /// Structured JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Markdown => OutputFormat::Markdown,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for skillcheck
#[derive(Parser, Debug)]
#[command(name = "skillcheck")]
#[command(author, version, about = "Validate MCP tool calls embedded in skill documents")]
#[command(long_about = r#"
skillcheck cross-references the MCP tool invocations inside SKILL.md code
samples against a table of known parameter traps: accepted names, commonly
misused names, and required names.

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./skillcheck.toml     Project-level config
3. ~/.config/skillcheck/config.toml   Global config

Examples:
  skillcheck validate skills/web-research/SKILL.md
  skillcheck validate --all --format markdown > VALIDATION.md
  skillcheck sync > docs/PARAMETER_SYNC_REPORT.md
  skillcheck size src/services/UserService.ts
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long, global = true)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate MCP tool calls in one skill document or the whole corpus
    Validate {
        /// Path to a single skill document
        path: Option<PathBuf>,

        /// Validate every skill under the configured skills directory
        #[arg(long)]
        all: bool,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Compare the built-in trap table against the reference documentation
    Sync {
        /// Update the built-in table from the reference (not yet
        /// implemented; the report is printed either way)
        #[arg(long)]
        update: bool,
    },

    /// Check whether a file fits within the line-count editing limit
    Size {
        /// File to check
        path: PathBuf,

        /// Maximum line count (defaults to the configured limit)
        #[arg(long, value_name = "N")]
        max_lines: Option<usize>,
    },
}
