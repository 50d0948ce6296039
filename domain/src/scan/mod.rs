//! Skill document scanning: fenced code blocks and gateway call extraction

pub mod call_parser;
pub mod code_blocks;

pub use call_parser::{ExtractedCall, parse_gateway_call};
pub use code_blocks::{CodeBlock, extract_code_blocks};
