//! Reference traps document parser
//!
//! The upstream parameter documentation is a markdown file with a fixed
//! heading hierarchy and inline marker glyphs:
//!
//! ```text
//! ### Serena MCP 服务器
//! #### 1. read_memory
//! **常见错误**:
//! - `path` ❌
//! **正确参数**:
//! - `memory_file_name` ✅ (必需)
//! ```
//!
//! Parsing walks the lines once; bullet lists are consumed by peeking
//! ahead from their section label. Anything that does not match the
//! expected shape is skipped, so a partially malformed document still
//! yields the tools it does describe.

use super::entities::{TrapEntry, TrapTable};
use regex::Regex;
use std::sync::LazyLock;

static SERVER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"###\s+(\w+)\s+MCP").expect("server heading pattern is valid"));

static TOOL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"####\s+\d+\.\s+(\S+)").expect("tool heading pattern is valid"));

static WRONG_BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("- `(\\w+)` ❌").expect("wrong bullet pattern is valid"));

static ACCEPTED_BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("- `(\\w+)` ✅").expect("accepted bullet pattern is valid"));

/// One tool as described by the reference document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceTool {
    pub server: String,
    pub tool: String,
    pub accepted: Vec<String>,
    pub known_wrong: Vec<String>,
    pub required: Vec<String>,
}

impl ReferenceTool {
    pub fn new(server: impl Into<String>, tool: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            tool: tool.into(),
            ..Default::default()
        }
    }

    /// Canonical `"<server>:<tool>"` identifier
    pub fn tool_id(&self) -> String {
        format!("{}:{}", self.server, self.tool)
    }

    pub fn to_entry(&self) -> TrapEntry {
        TrapEntry {
            accepted: self.accepted.clone(),
            known_wrong: self.known_wrong.clone(),
            required: self.required.clone(),
        }
    }
}

/// Parsed reference document: servers and their tools in document order.
#[derive(Debug, Clone, Default)]
pub struct ReferenceDoc {
    servers: Vec<(String, Vec<ReferenceTool>)>,
}

impl ReferenceDoc {
    pub fn server_count(&self) -> usize {
        self.servers.len()
    }

    pub fn tool_count(&self) -> usize {
        self.servers.iter().map(|(_, tools)| tools.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    /// Servers in document order
    pub fn servers(&self) -> impl Iterator<Item = (&str, &[ReferenceTool])> {
        self.servers
            .iter()
            .map(|(name, tools)| (name.as_str(), tools.as_slice()))
    }

    /// All tools in document order
    pub fn tools(&self) -> impl Iterator<Item = &ReferenceTool> {
        self.servers.iter().flat_map(|(_, tools)| tools.iter())
    }

    /// Flatten into a [`TrapTable`] keyed by `"<server>:<tool>"`
    pub fn to_table(&self) -> TrapTable {
        self.tools().fold(TrapTable::new(), |table, tool| {
            table.register(tool.tool_id(), tool.to_entry())
        })
    }

    fn server_tools_mut(&mut self, server: &str) -> &mut Vec<ReferenceTool> {
        if let Some(index) = self.servers.iter().position(|(name, _)| name == server) {
            &mut self.servers[index].1
        } else {
            self.servers.push((server.to_string(), Vec::new()));
            &mut self.servers.last_mut().expect("just pushed").1
        }
    }
}

/// Parse the reference traps markdown into a [`ReferenceDoc`].
pub fn parse_traps_doc(content: &str) -> ReferenceDoc {
    let lines: Vec<&str> = content.lines().collect();
    let mut doc = ReferenceDoc::default();

    let mut current_server: Option<String> = None;
    // Tool currently being filled: (server name, index into its tool list)
    let mut current_tool: Option<(String, usize)> = None;

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();

        if line.starts_with("### ") && line.contains("MCP") {
            if let Some(captures) = SERVER_PATTERN.captures(line) {
                let server = captures[1].to_lowercase();
                doc.server_tools_mut(&server);
                current_server = Some(server);
                current_tool = None;
            }
        } else if line.starts_with("#### ") {
            if let (Some(server), Some(captures)) = (&current_server, TOOL_PATTERN.captures(line)) {
                let tools = doc.server_tools_mut(server);
                tools.push(ReferenceTool::new(server.clone(), &captures[1]));
                current_tool = Some((server.clone(), tools.len() - 1));
            }
        } else if line.starts_with("**常见错误**") {
            if let Some((server, index)) = &current_tool {
                let wrong = collect_bullets(&lines, i + 1, &WRONG_BULLET, |_| false);
                let tool = &mut doc.server_tools_mut(server)[*index];
                for (name, _) in wrong {
                    tool.known_wrong.push(name);
                }
            }
        } else if line.starts_with("**正确参数**") {
            if let Some((server, index)) = &current_tool {
                let accepted = collect_bullets(&lines, i + 1, &ACCEPTED_BULLET, |bullet| {
                    bullet.contains("必需") || bullet.to_lowercase().contains("required")
                });
                let tool = &mut doc.server_tools_mut(server)[*index];
                for (name, required) in accepted {
                    tool.accepted.push(name.clone());
                    if required {
                        tool.required.push(name);
                    }
                }
            }
        }
    }

    doc
}

/// Consume consecutive `- \`param\`` bullets starting at `start`.
///
/// Returns the captured names with the result of `marker` evaluated on
/// each bullet line. Stops at the first non-bullet line.
fn collect_bullets(
    lines: &[&str],
    start: usize,
    pattern: &Regex,
    marker: impl Fn(&str) -> bool,
) -> Vec<(String, bool)> {
    let mut collected = Vec::new();
    let mut j = start;

    while j < lines.len() && lines[j].trim().starts_with("- `") {
        if let Some(captures) = pattern.captures(lines[j]) {
            collected.push((captures[1].to_string(), marker(lines[j])));
        }
        j += 1;
    }

    collected
}
