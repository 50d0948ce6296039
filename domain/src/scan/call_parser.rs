//! Gateway call extractor
//!
//! Recognizes the fixed invocation shape used inside skill code samples:
//!
//! ```text
//! await airis-exec({ tool: "server:tool", arguments: { key: value, ... } })
//! ```
//!
//! Extraction is regex-based and intentionally matches the reference
//! behavior, including its limitations:
//!
//! - The argument-object span is `\{[^}]*\}`, so it ends at the *first*
//!   closing brace. Argument values that contain nested object literals
//!   truncate the captured parameter list.
//! - Only the first call in a block is extracted; additional calls in the
//!   same block are not seen.
//! - Parameter names are any `word:` occurrence inside the captured span,
//!   which can pick up colon-suffixed words inside string values.
//!
//! These are load-bearing for call counts in existing reports; see
//! DESIGN.md before changing them.

use super::code_blocks::CodeBlock;
use regex::Regex;
use std::sync::LazyLock;

/// Maximum length of the diagnostic snippet carried with each call
const SNIPPET_LEN: usize = 200;

static CALL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"airis-exec\s*\(\s*\{\s*tool:\s*["']([^"']+)["']\s*,\s*arguments:\s*(\{[^}]*\})"#)
        .expect("gateway call pattern is valid")
});

static PARAM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+):\s*").expect("parameter pattern is valid"));

/// A gateway invocation extracted from one code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedCall {
    /// Tool identifier, `"<namespace>:<name>"`
    pub tool: String,
    /// Argument names in source order, duplicates collapsed
    pub params: Vec<String>,
    /// 1-based line number of the enclosing block's first content line
    pub line: usize,
    /// Leading slice of the block for diagnostics
    pub snippet: String,
}

impl ExtractedCall {
    /// Extract the first gateway call from a code block, if any.
    pub fn from_block(block: &CodeBlock) -> Option<Self> {
        let (tool, params) = parse_gateway_call(&block.code)?;
        Some(Self {
            tool,
            params,
            line: block.start_line,
            snippet: block.code.chars().take(SNIPPET_LEN).collect(),
        })
    }
}

/// Parse an `airis-exec` invocation out of raw code text.
///
/// Returns the tool id and the deduplicated argument names, or `None`
/// when the shape is not present. Absence of the shape is not an error;
/// plain code samples are common in skill documents.
pub fn parse_gateway_call(code: &str) -> Option<(String, Vec<String>)> {
    let captures = CALL_PATTERN.captures(code)?;

    let tool = captures[1].to_string();
    let args_span = &captures[2];

    let mut params = Vec::new();
    for capture in PARAM_PATTERN.captures_iter(args_span) {
        let name = capture[1].to_string();
        if !params.contains(&name) {
            params.push(name);
        }
    }

    Some((tool, params))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(code: &str) -> CodeBlock {
        CodeBlock {
            code: code.to_string(),
            start_line: 10,
        }
    }

    #[test]
    fn test_parse_basic_call() {
        let code = r#"await airis-exec({ tool: "serena:read_memory", arguments: { path: "notes.md" } })"#;
        let (tool, params) = parse_gateway_call(code).unwrap();
        assert_eq!(tool, "serena:read_memory");
        assert_eq!(params, vec!["path"]);
    }

    #[test]
    fn test_parse_multiple_arguments() {
        let code = r#"airis-exec({ tool: "tavily:search", arguments: { query: "rust", max_results: 5 } })"#;
        let (tool, params) = parse_gateway_call(code).unwrap();
        assert_eq!(tool, "tavily:search");
        assert_eq!(params, vec!["query", "max_results"]);
    }

    #[test]
    fn test_single_quoted_tool_id() {
        let code = "airis-exec({ tool: 'fetch:fetch', arguments: { url: x } })";
        let (tool, _) = parse_gateway_call(code).unwrap();
        assert_eq!(tool, "fetch:fetch");
    }

    #[test]
    fn test_no_call_shape_returns_none() {
        assert!(parse_gateway_call("const x = compute(1, 2);").is_none());
        assert!(parse_gateway_call("").is_none());
    }

    #[test]
    fn test_missing_arguments_attribute_returns_none() {
        let code = r#"airis-exec({ tool: "serena:read_memory" })"#;
        assert!(parse_gateway_call(code).is_none());
    }

    #[test]
    fn test_duplicate_params_collapse_in_order() {
        let code = r#"airis-exec({ tool: "t:t", arguments: { a: 1, b: 2, a: 3 } })"#;
        let (_, params) = parse_gateway_call(code).unwrap();
        assert_eq!(params, vec!["a", "b"]);
    }

    #[test]
    fn test_spans_multiple_lines() {
        let code = "await airis-exec({\n  tool: \"serena:write_memory\",\n  arguments: {\n    memory_file_name: \"x.md\",\n    content: body\n  }\n})";
        let (tool, params) = parse_gateway_call(code).unwrap();
        assert_eq!(tool, "serena:write_memory");
        assert_eq!(params, vec!["memory_file_name", "content"]);
    }

    #[test]
    fn test_nested_brace_truncates_span() {
        // The argument span stops at the first `}`: the nested object value
        // swallows the closing brace, so `later` is never seen.
        let code = r#"airis-exec({ tool: "t:t", arguments: { opts: { inner: 1 }, later: 2 } })"#;
        let (_, params) = parse_gateway_call(code).unwrap();
        assert_eq!(params, vec!["opts", "inner"]);
    }

    #[test]
    fn test_only_first_call_extracted() {
        let code = concat!(
            r#"airis-exec({ tool: "a:first", arguments: { x: 1 } });"#,
            "\n",
            r#"airis-exec({ tool: "b:second", arguments: { y: 2 } });"#
        );
        let (tool, params) = parse_gateway_call(code).unwrap();
        assert_eq!(tool, "a:first");
        assert_eq!(params, vec!["x"]);
    }

    #[test]
    fn test_from_block_carries_line_and_snippet() {
        let call = ExtractedCall::from_block(&block(
            r#"airis-exec({ tool: "fetch:fetch", arguments: { url: u } })"#,
        ))
        .unwrap();
        assert_eq!(call.line, 10);
        assert_eq!(call.tool, "fetch:fetch");
        assert!(call.snippet.starts_with("airis-exec"));
    }

    #[test]
    fn test_snippet_bounded() {
        let long_tail = "x".repeat(500);
        let code = format!(
            "airis-exec({{ tool: \"t:t\", arguments: {{ a: 1 }} }}); // {}",
            long_tail
        );
        let call = ExtractedCall::from_block(&block(&code)).unwrap();
        assert_eq!(call.snippet.chars().count(), 200);
    }
}
