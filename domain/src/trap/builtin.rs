//! Built-in parameter trap table
//!
//! The curated list of MCP tools whose parameter names are commonly
//! misused, together with their accepted and required names. Loaded once
//! at startup; the sync report compares this table against the reference
//! document to keep the two in step.

use super::entities::{TrapEntry, TrapTable};

impl TrapTable {
    /// The built-in trap table covering the known MCP servers.
    pub fn builtin() -> Self {
        TrapTable::new()
            // Serena MCP
            .register(
                "serena:read_memory",
                TrapEntry::new(
                    &["memory_file_name"],
                    &["path", "name", "filename"],
                    &["memory_file_name"],
                ),
            )
            .register(
                "serena:write_memory",
                TrapEntry::new(
                    &["memory_file_name", "content"],
                    &["filename", "path", "text", "data"],
                    &["memory_file_name", "content"],
                ),
            )
            .register(
                "serena:find_file",
                TrapEntry::new(
                    &["file_mask", "relative_path"],
                    &["filename", "path", "name", "directory"],
                    &["file_mask", "relative_path"],
                ),
            )
            .register(
                "serena:find_symbol",
                TrapEntry::new(
                    &["name_path_pattern"],
                    &["name", "symbol_name", "class_name"],
                    &["name_path_pattern"],
                ),
            )
            // Magic MCP
            .register(
                "magic:generate_ui",
                TrapEntry::new(
                    &["absolutePathToCurrentFile", "content", "prompt"],
                    &["path", "currentFile", "file", "filepath"],
                    &["absolutePathToCurrentFile", "content", "prompt"],
                ),
            )
            // MorphLLM MCP
            .register(
                "morphllm:query_codebase",
                TrapEntry::new(
                    &["repo_path", "query"],
                    &["path", "project_path", "directory"],
                    &["repo_path", "query"],
                ),
            )
            .register(
                "morphllm:get_file_content",
                TrapEntry::new(
                    &["repo_path", "file_path"],
                    &["path", "project_path", "directory"],
                    &["repo_path", "file_path"],
                ),
            )
            // Memory MCP
            .register(
                "memory:create_entities",
                TrapEntry::new(&["entities"], &["entity_list", "items"], &["entities"]),
            )
            .register(
                "memory:observe",
                TrapEntry::new(
                    &["observations"],
                    &["content", "text", "data"],
                    &["observations"],
                ),
            )
            // Tavily MCP
            .register(
                "tavily:search",
                TrapEntry::new(
                    &["query", "search_depth", "max_results"],
                    &["q", "depth", "limit", "count"],
                    &["query"],
                ),
            )
            .register(
                "tavily:extract",
                TrapEntry::new(&["urls"], &["url_list", "links"], &["urls"]),
            )
            // Fetch MCP
            .register(
                "fetch:fetch",
                TrapEntry::new(
                    &["url", "max_length", "start_index", "raw"],
                    &["link", "uri", "max_size"],
                    &["url"],
                ),
            )
            // Playwright MCP
            .register(
                "playwright:browser_navigate",
                TrapEntry::new(&["url"], &["link", "uri"], &["url"]),
            )
            .register(
                "playwright:snapshot",
                TrapEntry::new(&["name"], &["filename", "path"], &["name"]),
            )
            .register(
                "playwright:screenshot",
                TrapEntry::new(&["name"], &["filename", "path"], &["name"]),
            )
            // Context7 MCP
            .register(
                "context7:resolve-library-id",
                TrapEntry::new(&["library_name"], &["name", "lib", "package"], &["library_name"]),
            )
            .register(
                "context7:query-docs",
                TrapEntry::new(
                    &["library_id", "query"],
                    &["id", "lib_id", "q"],
                    &["library_id", "query"],
                ),
            )
    }
}
