//! Fenced code-block scanner for skill documents
//!
//! Extracts TypeScript code blocks from markdown together with the line
//! number of their first content line. Scanning is a pure function of the
//! input text: running it twice yields the same ordered block list.

/// A fenced code block with its position in the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Block content without the fence lines
    pub code: String,
    /// 1-based line number of the first content line
    pub start_line: usize,
}

/// Extract ```typescript / ```ts fenced blocks from a document.
///
/// A trimmed line starting with the fence marker opens a block; a bare
/// ``` closes it. Empty blocks are skipped, and a block left unterminated
/// at end of input is dropped rather than reported.
pub fn extract_code_blocks(content: &str) -> Vec<CodeBlock> {
    let mut blocks = Vec::new();
    let mut in_block = false;
    let mut current: Vec<&str> = Vec::new();
    let mut start_line = 0;

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with("```typescript") || trimmed.starts_with("```ts") {
            in_block = true;
            start_line = i + 2;
            current.clear();
        } else if trimmed == "```" && in_block {
            if !current.is_empty() {
                blocks.push(CodeBlock {
                    code: current.join("\n"),
                    start_line,
                });
            }
            in_block = false;
            current.clear();
        } else if in_block {
            current.push(line);
        }
    }

    blocks
}
