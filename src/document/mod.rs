//! Conversation export parsing.
//!
//! Locates artifacts, fenced code blocks and prose sections in a markdown
//! export and hands them to the exporter as [`CodeBlock`]s.

mod parser;
mod types;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

pub use parser::parse;
pub use types::{BlockKind, CodeBlock, Document};

/// Reads and parses an export file.
pub fn load(path: &Path) -> Result<Document> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(parse(&text))
}
