//! CLI entrypoint for skillcheck
//!
//! This is the main binary that wires together all layers using
//! dependency injection and maps outcomes onto the exit-code contract:
//! 0 when everything is clean, 1 when findings were reported, 2 on a
//! configuration error.

use anyhow::{Context, Result, bail};
use clap::Parser;
use skillcheck_application::{
    CheckFileSizeUseCase, NoProgress, SyncTrapsUseCase, ValidateCorpusUseCase,
    ValidateSkillUseCase, ValidationProgressNotifier,
};
use skillcheck_domain::{CorpusReport, OutputFormat, TrapTable};
use skillcheck_infrastructure::{ConfigLoader, FileConfig, LocalDocumentSource};
use skillcheck_presentation::{
    Cli, Command, ProgressReporter, SizeReportRenderer, SyncReportRenderer, formatter_for,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Findings were reported (parameter errors or an oversized file)
const EXIT_FINDINGS: u8 = 1;
/// Configuration error (missing directory, bad paths, unloadable config)
const EXIT_CONFIG: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("Error: {:#}", error);
            ExitCode::from(EXIT_CONFIG)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };

    // === Dependency Injection ===
    let source = Arc::new(LocalDocumentSource::new());

    match cli.command {
        Command::Validate { path, all, format } => {
            let format = format.map(OutputFormat::from).unwrap_or(config.output.format);
            run_validate(&config, source, path, all, format, cli.quiet)
        }
        Command::Sync { update } => run_sync(&config, source, update),
        Command::Size { path, max_lines } => {
            let limit = max_lines.unwrap_or(config.limits.max_file_lines);
            run_size(source, path, limit)
        }
    }
}

fn run_validate(
    config: &FileConfig,
    source: Arc<LocalDocumentSource>,
    path: Option<PathBuf>,
    all: bool,
    format: OutputFormat,
    quiet: bool,
) -> Result<ExitCode> {
    let corpus = if all {
        info!(
            "validating corpus under {}",
            config.paths.skills_dir.display()
        );
        let use_case = ValidateCorpusUseCase::new(source, TrapTable::builtin());

        let progress: Box<dyn ValidationProgressNotifier> = if quiet {
            Box::new(NoProgress)
        } else {
            Box::new(ProgressReporter::new())
        };

        use_case.execute(&config.paths.skills_dir, progress.as_ref())?
    } else if let Some(path) = path {
        if !path.exists() {
            bail!("file not found: {}", path.display());
        }

        let skill_name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let use_case = ValidateSkillUseCase::new(source, TrapTable::builtin());
        CorpusReport::single(skill_name, use_case.execute(&path))
    } else {
        bail!("provide a skill document path, or --all to validate the whole corpus");
    };

    println!("{}", formatter_for(format).format(&corpus));

    if corpus.has_errors() {
        Ok(ExitCode::from(EXIT_FINDINGS))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn run_sync(
    config: &FileConfig,
    source: Arc<LocalDocumentSource>,
    update: bool,
) -> Result<ExitCode> {
    let use_case = SyncTrapsUseCase::new(source, TrapTable::builtin());
    let output = use_case.execute(&config.paths.traps_doc)?;

    println!(
        "{}",
        SyncReportRenderer::render(&output, &config.paths.traps_doc)
    );

    if update {
        println!();
        println!("{}", "=".repeat(80));
        println!("Note: --update is not yet implemented");
        println!("Please update the built-in trap table manually based on the report above");
        println!("{}", "=".repeat(80));
    }

    Ok(ExitCode::SUCCESS)
}

fn run_size(source: Arc<LocalDocumentSource>, path: PathBuf, limit: usize) -> Result<ExitCode> {
    let use_case = CheckFileSizeUseCase::new(source);

    match use_case.execute(&path, limit) {
        Ok(report) => {
            println!("{}", SizeReportRenderer::render(&report));
            if report.fits() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::from(EXIT_FINDINGS))
            }
        }
        Err(error) => {
            eprintln!("❌ Error: {}", error);
            Ok(ExitCode::from(EXIT_FINDINGS))
        }
    }
}
