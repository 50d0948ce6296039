//! Trap table coverage diff
//!
//! Flat batch comparison between the reference document and the built-in
//! table: tool ids present on only one side, and accepted-parameter
//! mismatches for tools present on both. No state is carried between
//! runs.

use super::doc_parser::ReferenceDoc;
use super::entities::TrapTable;
use std::collections::HashSet;

/// Accepted-parameter disagreement for a tool both sides know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamMismatch {
    pub tool: String,
    pub reference_accepted: Vec<String>,
    pub builtin_accepted: Vec<String>,
    /// Accepted in the reference but absent from the built-in table
    pub missing_in_builtin: Vec<String>,
    /// Accepted in the built-in table but absent from the reference
    pub extra_in_builtin: Vec<String>,
}

/// Result of diffing the reference document against the built-in table.
#[derive(Debug, Clone, Default)]
pub struct TableDiff {
    pub reference_servers: usize,
    pub reference_tools: usize,
    pub builtin_tools: usize,
    /// Tools in the reference but not in the built-in table, document order
    pub missing_in_builtin: Vec<String>,
    /// Tools in the built-in table but not in the reference, sorted
    pub extra_in_builtin: Vec<String>,
    pub mismatches: Vec<ParamMismatch>,
}

impl TableDiff {
    pub fn is_in_sync(&self) -> bool {
        self.missing_in_builtin.is_empty()
            && self.extra_in_builtin.is_empty()
            && self.mismatches.is_empty()
    }
}

/// Compare the parsed reference document against the built-in table.
pub fn diff_against_builtin(reference: &ReferenceDoc, builtin: &TrapTable) -> TableDiff {
    let mut diff = TableDiff {
        reference_servers: reference.server_count(),
        reference_tools: reference.tool_count(),
        builtin_tools: builtin.len(),
        ..Default::default()
    };

    let reference_ids: HashSet<String> = reference.tools().map(|t| t.tool_id()).collect();

    for tool in reference.tools() {
        let tool_id = tool.tool_id();

        let Some(entry) = builtin.get(&tool_id) else {
            diff.missing_in_builtin.push(tool_id);
            continue;
        };

        let reference_set: HashSet<&String> = tool.accepted.iter().collect();
        let builtin_set: HashSet<&String> = entry.accepted.iter().collect();
        if reference_set == builtin_set {
            continue;
        }

        let mut missing: Vec<String> = reference_set
            .difference(&builtin_set)
            .map(|s| s.to_string())
            .collect();
        let mut extra: Vec<String> = builtin_set
            .difference(&reference_set)
            .map(|s| s.to_string())
            .collect();
        missing.sort_unstable();
        extra.sort_unstable();

        diff.mismatches.push(ParamMismatch {
            tool: tool_id,
            reference_accepted: tool.accepted.clone(),
            builtin_accepted: entry.accepted.clone(),
            missing_in_builtin: missing,
            extra_in_builtin: extra,
        });
    }

    diff.extra_in_builtin = builtin
        .tool_ids()
        .into_iter()
        .filter(|id| !reference_ids.contains(*id))
        .map(|id| id.to_string())
        .collect();

    diff
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trap::doc_parser::parse_traps_doc;
    use crate::trap::entities::TrapEntry;

    fn reference() -> ReferenceDoc {
        parse_traps_doc(
            r#"### Serena MCP 服务器

#### 1. read_memory

**正确参数**:
- `memory_file_name` ✅ (必需)

#### 2. list_memories

**正确参数**:
- `prefix` ✅
"#,
        )
    }

    #[test]
    fn test_identical_tables_are_in_sync() {
        let builtin = TrapTable::new()
            .register(
                "serena:read_memory",
                TrapEntry::new(&["memory_file_name"], &[], &["memory_file_name"]),
            )
            .register("serena:list_memories", TrapEntry::new(&["prefix"], &[], &[]));

        let diff = diff_against_builtin(&reference(), &builtin);
        assert!(diff.is_in_sync());
        assert_eq!(diff.reference_servers, 1);
        assert_eq!(diff.reference_tools, 2);
        assert_eq!(diff.builtin_tools, 2);
    }

    #[test]
    fn test_missing_in_builtin() {
        let builtin = TrapTable::new().register(
            "serena:read_memory",
            TrapEntry::new(&["memory_file_name"], &[], &[]),
        );

        let diff = diff_against_builtin(&reference(), &builtin);
        assert_eq!(diff.missing_in_builtin, vec!["serena:list_memories"]);
        assert!(diff.extra_in_builtin.is_empty());
        assert!(!diff.is_in_sync());
    }

    #[test]
    fn test_extra_in_builtin_sorted() {
        let builtin = TrapTable::new()
            .register("serena:read_memory", TrapEntry::new(&["memory_file_name"], &[], &[]))
            .register("serena:list_memories", TrapEntry::new(&["prefix"], &[], &[]))
            .register("zeta:tool", TrapEntry::new(&[], &[], &[]))
            .register("alpha:tool", TrapEntry::new(&[], &[], &[]));

        let diff = diff_against_builtin(&reference(), &builtin);
        assert_eq!(diff.extra_in_builtin, vec!["alpha:tool", "zeta:tool"]);
    }

    #[test]
    fn test_param_mismatch_symmetric_difference() {
        let builtin = TrapTable::new()
            .register(
                "serena:read_memory",
                TrapEntry::new(&["memory_file_name", "offset"], &[], &[]),
            )
            .register("serena:list_memories", TrapEntry::new(&["prefix"], &[], &[]));

        let diff = diff_against_builtin(&reference(), &builtin);
        assert_eq!(diff.mismatches.len(), 1);

        let mismatch = &diff.mismatches[0];
        assert_eq!(mismatch.tool, "serena:read_memory");
        assert!(mismatch.missing_in_builtin.is_empty());
        assert_eq!(mismatch.extra_in_builtin, vec!["offset"]);
    }

    #[test]
    fn test_matching_sets_in_different_order_not_a_mismatch() {
        let doc = parse_traps_doc(
            r#"### Tavily MCP 服务器

#### 1. search

**正确参数**:
- `query` ✅
- `max_results` ✅
"#,
        );
        let builtin = TrapTable::new().register(
            "tavily:search",
            TrapEntry::new(&["max_results", "query"], &[], &[]),
        );

        let diff = diff_against_builtin(&doc, &builtin);
        assert!(diff.mismatches.is_empty());
    }
}
