//! Trap table entities
//!
//! A *trap* records how a tool's parameters are commonly misnamed: the
//! accepted names, the names people reach for by mistake, and the subset
//! that is required on every call.

use std::collections::HashMap;

/// Parameter-name sets for a single tool.
///
/// Name order is preserved as registered so that suggestion lists and
/// sync reports render deterministically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrapEntry {
    /// Parameter names the tool actually accepts
    pub accepted: Vec<String>,
    /// Names commonly used by mistake
    pub known_wrong: Vec<String>,
    /// Accepted names that must be present on every call
    pub required: Vec<String>,
}

impl TrapEntry {
    pub fn new(accepted: &[&str], known_wrong: &[&str], required: &[&str]) -> Self {
        Self {
            accepted: accepted.iter().map(|s| s.to_string()).collect(),
            known_wrong: known_wrong.iter().map(|s| s.to_string()).collect(),
            required: required.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// All accepted names joined for display in suggestions
    pub fn accepted_joined(&self) -> String {
        self.accepted.join(", ")
    }
}

/// Immutable lookup table mapping tool id (`"<namespace>:<name>"`) to its
/// [`TrapEntry`].
///
/// Built once at startup via builder registration and never mutated
/// afterwards. Tools absent from the table validate as a no-op.
#[derive(Debug, Clone, Default)]
pub struct TrapTable {
    entries: HashMap<String, TrapEntry>,
}

impl TrapTable {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a trap entry (builder pattern)
    pub fn register(mut self, tool_id: impl Into<String>, entry: TrapEntry) -> Self {
        self.entries.insert(tool_id.into(), entry);
        self
    }

    pub fn get(&self, tool_id: &str) -> Option<&TrapEntry> {
        self.entries.get(tool_id)
    }

    pub fn contains(&self, tool_id: &str) -> bool {
        self.entries.contains_key(tool_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tool ids in sorted order, for deterministic iteration
    pub fn tool_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.entries.keys().map(|s| s.as_str()).collect();
        ids.sort_unstable();
        ids
    }

    /// Distinct namespace prefixes (the part before `:`), sorted
    pub fn namespaces(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = self
            .entries
            .keys()
            .map(|id| id.split(':').next().unwrap_or(id.as_str()))
            .collect();
        seen.sort_unstable();
        seen.dedup();
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let table = TrapTable::new().register(
            "serena:read_memory",
            TrapEntry::new(&["memory_file_name"], &["path"], &["memory_file_name"]),
        );

        assert!(table.contains("serena:read_memory"));
        assert!(!table.contains("serena:unknown"));
        assert_eq!(table.len(), 1);

        let entry = table.get("serena:read_memory").unwrap();
        assert_eq!(entry.accepted, vec!["memory_file_name"]);
        assert_eq!(entry.known_wrong, vec!["path"]);
        assert_eq!(entry.required, vec!["memory_file_name"]);
    }

    #[test]
    fn test_accepted_joined_preserves_order() {
        let entry = TrapEntry::new(&["repo_path", "query"], &[], &[]);
        assert_eq!(entry.accepted_joined(), "repo_path, query");
    }

    #[test]
    fn test_tool_ids_sorted() {
        let table = TrapTable::new()
            .register("tavily:search", TrapEntry::new(&["query"], &[], &[]))
            .register("fetch:fetch", TrapEntry::new(&["url"], &[], &[]))
            .register("memory:observe", TrapEntry::new(&["observations"], &[], &[]));

        assert_eq!(
            table.tool_ids(),
            vec!["fetch:fetch", "memory:observe", "tavily:search"]
        );
    }

    #[test]
    fn test_namespaces_deduplicated() {
        let table = TrapTable::new()
            .register("serena:read_memory", TrapEntry::new(&[], &[], &[]))
            .register("serena:write_memory", TrapEntry::new(&[], &[], &[]))
            .register("fetch:fetch", TrapEntry::new(&[], &[], &[]));

        assert_eq!(table.namespaces(), vec!["fetch", "serena"]);
    }

    #[test]
    fn test_empty_table() {
        let table = TrapTable::new();
        assert!(table.is_empty());
        assert!(table.tool_ids().is_empty());
        assert!(table.namespaces().is_empty());
    }
}
