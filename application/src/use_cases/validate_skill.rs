//! Validate Skill use case.
//!
//! Runs the full pipeline for one skill document: scan fenced code
//! blocks, extract gateway calls, cross-reference each call's argument
//! names against the trap table, and accumulate everything into a
//! [`FileReport`].

use crate::ports::document_source::DocumentSource;
use skillcheck_domain::scan::{ExtractedCall, extract_code_blocks};
use skillcheck_domain::trap::{ParamValidator, TableValidator, TrapTable};
use skillcheck_domain::{FileReport, ParamError};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// Use case for validating a single skill document.
///
/// A read failure is downgraded to a warning on the report so a corpus
/// run can continue past one broken file. Blocks without a recognizable
/// call shape contribute nothing; every detected issue is accumulated,
/// the scan never stops early.
pub struct ValidateSkillUseCase<S: DocumentSource> {
    source: Arc<S>,
    validator: TableValidator,
}

impl<S: DocumentSource> ValidateSkillUseCase<S> {
    pub fn new(source: Arc<S>, table: TrapTable) -> Self {
        Self {
            source,
            validator: TableValidator::new(table),
        }
    }

    /// Validate one document and produce its report.
    pub fn execute(&self, path: &Path) -> FileReport {
        let file_path = path.display().to_string();

        match self.source.read_document(path) {
            Ok(content) => validate_content(&file_path, &content, &self.validator),
            Err(error) => {
                warn!("skipping {}: {}", file_path, error);
                let mut report = FileReport::new(&file_path);
                report.warnings.push(format!("Failed to read file: {}", error));
                report
            }
        }
    }
}

/// Validate document text that is already in memory.
pub fn validate_content(file_path: &str, content: &str, validator: &TableValidator) -> FileReport {
    let mut report = FileReport::new(file_path);

    for block in extract_code_blocks(content) {
        let Some(call) = ExtractedCall::from_block(&block) else {
            continue;
        };

        report.total_calls += 1;
        debug!(
            "{}:{} call to {} with {} argument(s)",
            file_path,
            call.line,
            call.tool,
            call.params.len()
        );

        for (wrong, suggestions) in validator.wrong_names(&call.tool, &call.params) {
            report.errors.push(ParamError::wrong_name(
                file_path,
                call.line,
                &call.tool,
                wrong,
                suggestions,
                &call.snippet,
            ));
        }

        for missing in validator.missing_required(&call.tool, &call.params) {
            report.errors.push(ParamError::missing_required(
                file_path,
                call.line,
                &call.tool,
                missing,
                &call.snippet,
            ));
        }
    }

    report
}
