//! Terminal output for the file-size check

use colored::Colorize;
use skillcheck_application::FileSizeReport;

/// Renders a [`FileSizeReport`] for terminal display
pub struct SizeReportRenderer;

impl SizeReportRenderer {
    pub fn render(report: &FileSizeReport) -> String {
        let mut output = String::new();

        output.push_str(&format!("\n{}\n", "📊 File info:".cyan().bold()));
        output.push_str(&format!("  Path: {}\n", report.path));
        output.push_str(&format!("  Lines: {}\n", report.line_count));
        output.push_str(&format!(
            "  Size: {:.2} KB\n\n",
            report.size_bytes as f64 / 1024.0
        ));

        if report.fits() {
            output.push_str(&format!(
                "{} ({:.1}% of limit)\n",
                "✅ File size is fine".green(),
                report.percent_of_limit()
            ));
            output.push_str("   Suitable for automated editing\n");
        } else {
            output.push_str(&format!(
                "{} ({} line(s) over)\n",
                "❌ File too large".red(),
                report.overflow()
            ));
            output.push_str(&format!("   Limit: {} lines\n\n", report.max_lines));
            output.push_str(&format!("{}\n", "💡 Suggestions:".yellow()));
            output.push_str("   1. Split the file into smaller modules\n");
            output.push_str("   2. Fall back to manual editing tools\n");
            output.push_str("   3. Edit only part of the file\n");
        }

        output
    }
}
