//! Markdown renderer for the trap-table sync report

use chrono::Local;
use skillcheck_application::SyncOutput;
use std::path::Path;

/// Renders the sync comparison as a markdown document
pub struct SyncReportRenderer;

impl SyncReportRenderer {
    pub fn render(output: &SyncOutput, traps_doc: &Path) -> String {
        Self::render_with_date(output, traps_doc, &Local::now().format("%Y-%m-%d").to_string())
    }

    /// Testable entry point with an explicit date stamp
    pub fn render_with_date(output: &SyncOutput, traps_doc: &Path, date: &str) -> String {
        let diff = &output.diff;
        let mut lines: Vec<String> = Vec::new();

        lines.push("# MCP Parameter Synchronization Report".to_string());
        lines.push(String::new());
        lines.push(format!("**Generated**: {}", date));
        lines.push(format!("**Source**: {}", traps_doc.display()));
        lines.push(String::new());

        lines.push("## Coverage Summary".to_string());
        lines.push(String::new());
        lines.push(format!("- **Reference servers**: {}", diff.reference_servers));
        lines.push(format!("- **Reference tools**: {}", diff.reference_tools));
        lines.push(format!("- **Built-in tools**: {}", diff.builtin_tools));
        lines.push(String::new());

        if !diff.missing_in_builtin.is_empty() {
            lines.push("## Tools in the reference but NOT in the built-in table".to_string());
            lines.push(String::new());
            lines.push("These tools should be added to the built-in trap table:".to_string());
            lines.push(String::new());
            let mut missing = diff.missing_in_builtin.clone();
            missing.sort_unstable();
            for tool in missing {
                lines.push(format!("- `{}`", tool));
            }
            lines.push(String::new());
        }

        if !diff.extra_in_builtin.is_empty() {
            lines.push("## Tools in the built-in table but NOT in the reference".to_string());
            lines.push(String::new());
            lines.push("These tools may be outdated or custom:".to_string());
            lines.push(String::new());
            for tool in &diff.extra_in_builtin {
                lines.push(format!("- `{}`", tool));
            }
            lines.push(String::new());
        }

        if !diff.mismatches.is_empty() {
            lines.push("## Parameter Mismatches".to_string());
            lines.push(String::new());
            lines.push("Tools with different parameter definitions:".to_string());
            lines.push(String::new());

            for mismatch in &diff.mismatches {
                lines.push(format!("### `{}`", mismatch.tool));
                lines.push(String::new());

                if !mismatch.missing_in_builtin.is_empty() {
                    lines.push("**Missing in the built-in table**:".to_string());
                    for param in &mismatch.missing_in_builtin {
                        lines.push(format!("- `{}`", param));
                    }
                    lines.push(String::new());
                }

                if !mismatch.extra_in_builtin.is_empty() {
                    lines.push("**Extra in the built-in table**:".to_string());
                    for param in &mismatch.extra_in_builtin {
                        lines.push(format!("- `{}`", param));
                    }
                    lines.push(String::new());
                }
            }
        }

        lines.push("## Reference Parameter Listing".to_string());
        lines.push(String::new());
        lines.push("Complete parameter reference from the source document:".to_string());
        lines.push(String::new());

        let mut servers: Vec<_> = output.reference.servers().collect();
        servers.sort_by_key(|(name, _)| name.to_string());

        for (server, tools) in servers {
            lines.push(format!("### {} MCP", capitalize(server)));
            lines.push(String::new());

            for tool in tools {
                lines.push(format!("#### `{}`", tool.tool_id()));
                lines.push(String::new());

                if !tool.accepted.is_empty() {
                    lines.push("**Correct parameters**:".to_string());
                    for param in &tool.accepted {
                        let required = if tool.required.contains(param) {
                            " (required)"
                        } else {
                            ""
                        };
                        lines.push(format!("- `{}`{}", param, required));
                    }
                    lines.push(String::new());
                }

                if !tool.known_wrong.is_empty() {
                    lines.push("**Common errors**:".to_string());
                    for param in &tool.known_wrong {
                        lines.push(format!("- `{}` ❌", param));
                    }
                    lines.push(String::new());
                }
            }
        }

        lines.push("---".to_string());
        lines.push(String::new());
        lines.push("**Next Steps**:".to_string());
        lines.push(String::new());
        lines.push("1. Add missing tools to the built-in trap table".to_string());
        lines.push("2. Fix parameter mismatches".to_string());
        lines.push("3. Re-run validation: `skillcheck validate --all`".to_string());

        lines.join("\n")
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillcheck_domain::trap::{TrapEntry, TrapTable, diff_against_builtin, parse_traps_doc};

    fn sample_output() -> SyncOutput {
        let reference = parse_traps_doc(
            r#"### Serena MCP 服务器

#### 1. read_memory

**常见错误**:
- `path` ❌

**正确参数**:
- `memory_file_name` ✅ (必需)

#### 2. new_tool

**正确参数**:
- `thing` ✅
"#,
        );
        let builtin = TrapTable::new()
            .register(
                "serena:read_memory",
                TrapEntry::new(&["memory_file_name", "offset"], &[], &["memory_file_name"]),
            )
            .register("custom:only_here", TrapEntry::new(&["x"], &[], &[]));
        let diff = diff_against_builtin(&reference, &builtin);
        SyncOutput { reference, diff }
    }

    #[test]
    fn test_header_and_summary() {
        let output =
            SyncReportRenderer::render_with_date(&sample_output(), Path::new("TRAPS.md"), "2026-08-06");

        assert!(output.starts_with("# MCP Parameter Synchronization Report"));
        assert!(output.contains("**Generated**: 2026-08-06"));
        assert!(output.contains("**Source**: TRAPS.md"));
        assert!(output.contains("- **Reference servers**: 1"));
        assert!(output.contains("- **Reference tools**: 2"));
        assert!(output.contains("- **Built-in tools**: 2"));
    }

    #[test]
    fn test_missing_and_extra_sections() {
        let output =
            SyncReportRenderer::render_with_date(&sample_output(), Path::new("TRAPS.md"), "2026-08-06");

        assert!(output.contains("## Tools in the reference but NOT in the built-in table"));
        assert!(output.contains("- `serena:new_tool`"));
        assert!(output.contains("## Tools in the built-in table but NOT in the reference"));
        assert!(output.contains("- `custom:only_here`"));
    }

    #[test]
    fn test_mismatch_section() {
        let output =
            SyncReportRenderer::render_with_date(&sample_output(), Path::new("TRAPS.md"), "2026-08-06");

        assert!(output.contains("## Parameter Mismatches"));
        assert!(output.contains("### `serena:read_memory`"));
        assert!(output.contains("**Extra in the built-in table**:"));
        assert!(output.contains("- `offset`"));
    }

    #[test]
    fn test_reference_listing_with_required_marker() {
        let output =
            SyncReportRenderer::render_with_date(&sample_output(), Path::new("TRAPS.md"), "2026-08-06");

        assert!(output.contains("### Serena MCP"));
        assert!(output.contains("#### `serena:read_memory`"));
        assert!(output.contains("- `memory_file_name` (required)"));
        assert!(output.contains("- `path` ❌"));
    }

    #[test]
    fn test_next_steps_footer() {
        let output =
            SyncReportRenderer::render_with_date(&sample_output(), Path::new("TRAPS.md"), "2026-08-06");
        assert!(output.contains("**Next Steps**:"));
        assert!(output.contains("`skillcheck validate --all`"));
    }
}
