//! Progress reporting for corpus validation

use indicatif::{ProgressBar, ProgressStyle};
use skillcheck_application::ports::progress::ValidationProgressNotifier;
use skillcheck_domain::FileReport;
use std::sync::Mutex;

/// Reports corpus progress with a terminal progress bar
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationProgressNotifier for ProgressReporter {
    fn on_corpus_start(&self, total_files: usize) {
        let pb = ProgressBar::new(total_files as u64);
        pb.set_style(Self::bar_style());
        pb.set_prefix("Validating");
        pb.set_message("Starting...");

        *self.bar.lock().unwrap() = Some(pb);
    }

    fn on_file_complete(&self, skill_name: &str, report: &FileReport) {
        if let Some(pb) = self.bar.lock().unwrap().as_ref() {
            let marker = if report.is_valid() { "v" } else { "x" };
            pb.set_message(format!("{} {}", marker, skill_name));
            pb.inc(1);
        }
    }

    fn on_corpus_complete(&self) {
        if let Some(pb) = self.bar.lock().unwrap().take() {
            pb.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle_does_not_panic() {
        let reporter = ProgressReporter::new();
        reporter.on_corpus_start(2);
        reporter.on_file_complete("alpha", &FileReport::new("a/SKILL.md"));
        reporter.on_file_complete("beta", &FileReport::new("b/SKILL.md"));
        reporter.on_corpus_complete();
    }

    #[test]
    fn test_complete_without_start_is_harmless() {
        let reporter = ProgressReporter::new();
        reporter.on_file_complete("alpha", &FileReport::new("a/SKILL.md"));
        reporter.on_corpus_complete();
    }
}
