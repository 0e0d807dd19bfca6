//! Line-based parser for markdown conversation exports.
//!
//! Recognizes three kinds of content:
//! - **Artifacts**: a heading naming a path (`## src/lib.rs - entry point`)
//!   followed by a fenced block
//! - **Scripts**: any other fenced block, optionally with a filename after
//!   the language tag (```` ```python setup.py ````)
//! - **Docs**: prose between fences that is long enough to keep

use std::collections::HashSet;

use super::types::{BlockKind, CodeBlock, Document};
use crate::files::slug::kebab_case;

/// Opening/closing marker of a fenced block.
const FENCE: &str = "```";

/// Metadata fields recognized in `**Key:** value` lines.
const METADATA_KEYS: &[&str] = &["Created", "Updated", "Exported"];

/// Prose sections shorter than this (after trimming) are ignored.
const MIN_DOC_LENGTH: usize = 50;

/// Language recorded for artifacts whose fence has no info string.
const DEFAULT_ARTIFACT_LANGUAGE: &str = "text";

/// Language recorded for prose sections.
const DOC_LANGUAGE: &str = "markdown";

/// Parses a conversation export into a [`Document`].
pub fn parse(text: &str) -> Document {
    let lines: Vec<&str> = text.lines().collect();
    let mut doc = Document::default();
    let mut artifacts = Vec::new();
    let mut scripts = Vec::new();
    let mut docs = Vec::new();

    let mut pending_path: Option<String> = None;
    let mut prose_start = 0;
    let mut prose: Vec<&str> = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        let trimmed = line.trim();

        if let Some(info) = trimmed.strip_prefix(FENCE) {
            flush_prose(&mut docs, prose_start, &mut prose);

            let (body, next) = read_fence_body(&lines, i + 1);
            let block = match pending_path.take() {
                Some(path) => {
                    let language = first_word(info).unwrap_or(DEFAULT_ARTIFACT_LANGUAGE);
                    CodeBlock::new(BlockKind::Artifact, i)
                        .with_declared_name(path)
                        .with_language(language)
                        .with_body(body)
                }
                None => script_block(info, i, body),
            };
            match block.kind {
                BlockKind::Artifact => artifacts.push(block),
                _ => scripts.push(block),
            }

            i = next;
            prose_start = i;
            continue;
        }

        if doc.title.is_none() {
            if let Some(title) = trimmed.strip_prefix("# ") {
                doc.title = Some(title.trim().to_string());
            }
        }
        if let Some((key, value)) = parse_metadata(trimmed) {
            doc.metadata.insert(key, value);
        }
        if trimmed.starts_with("##") {
            pending_path = parse_artifact_heading(trimmed);
        }

        if prose.is_empty() {
            prose_start = i;
        }
        prose.push(line);
        i += 1;
    }
    flush_prose(&mut docs, prose_start, &mut prose);

    // Scripts repeating an artifact body are the same file shown twice
    let artifact_bodies: HashSet<&Vec<String>> = artifacts.iter().map(|a| &a.body).collect();
    let scripts: Vec<CodeBlock> = scripts
        .into_iter()
        .filter(|s| !artifact_bodies.contains(&s.body))
        .collect();

    let mut blocks = artifacts;
    blocks.extend(scripts);
    blocks.extend(docs);
    blocks.sort_by_key(|b| b.origin_index);
    doc.blocks = blocks;

    tracing::debug!(
        artifacts = doc.count(BlockKind::Artifact),
        scripts = doc.count(BlockKind::Script),
        docs = doc.count(BlockKind::Doc),
        "Parsed document"
    );

    doc
}

/// Collects fence body lines starting at `start`.
///
/// Returns the body and the index just past the closing fence. An
/// unterminated fence runs to the end of the document.
fn read_fence_body(lines: &[&str], start: usize) -> (Vec<String>, usize) {
    let mut body = Vec::new();
    let mut j = start;
    while j < lines.len() {
        if lines[j].trim().starts_with(FENCE) {
            return (body, j + 1);
        }
        body.push(lines[j].to_string());
        j += 1;
    }
    (body, j)
}

/// Builds a script block from a fence info string like `python setup.py`.
fn script_block(info: &str, origin_index: usize, body: Vec<String>) -> CodeBlock {
    let mut block = CodeBlock::new(BlockKind::Script, origin_index).with_body(body);
    let info = info.trim();
    if info.is_empty() {
        return block;
    }

    match info.split_once(char::is_whitespace) {
        Some((language, filename)) => {
            block = block.with_language(language);
            let filename = filename.trim();
            if !filename.is_empty() {
                block = block.with_declared_name(filename);
            }
        }
        None => block = block.with_language(info),
    }
    block
}

fn first_word(s: &str) -> Option<&str> {
    s.split_whitespace().next()
}

/// Parses `**Created:** 2024-01-01` style lines.
fn parse_metadata(line: &str) -> Option<(String, String)> {
    let rest = line.strip_prefix("**")?;
    let (key, value) = rest.split_once(":**")?;
    if !METADATA_KEYS.contains(&key) {
        return None;
    }
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    Some((key.to_lowercase(), value.to_string()))
}

/// Extracts the path from a heading like `## src/app.ts - Main app`.
///
/// Only headings containing `/` name artifacts.
fn parse_artifact_heading(line: &str) -> Option<String> {
    let text = line.trim_start_matches('#');
    if !text.starts_with(char::is_whitespace) {
        return None;
    }
    let text = text.trim();
    let path = match text.split_once(" - ") {
        Some((path, _description)) => path.trim(),
        None => text,
    };
    if path.is_empty() || !path.contains('/') {
        return None;
    }
    Some(path.to_string())
}

fn is_metadata_section(text: &str) -> bool {
    METADATA_KEYS
        .iter()
        .any(|key| text.contains(&format!("**{}:**", key)))
}

/// Turns accumulated prose into a doc block if it is worth keeping.
fn flush_prose(docs: &mut Vec<CodeBlock>, start: usize, prose: &mut Vec<&str>) {
    let lines = std::mem::take(prose);

    let first = lines.iter().position(|l| !l.trim().is_empty());
    let last = lines.iter().rposition(|l| !l.trim().is_empty());
    let (first, last) = match (first, last) {
        (Some(first), Some(last)) => (first, last),
        _ => return,
    };
    let kept = &lines[first..=last];

    let text = kept.join("\n");
    if text.trim().len() < MIN_DOC_LENGTH || is_metadata_section(&text) {
        return;
    }

    let mut block = CodeBlock::new(BlockKind::Doc, start + first)
        .with_language(DOC_LANGUAGE)
        .with_body(kept.iter().copied());

    let title = kept
        .iter()
        .find_map(|l| l.trim().strip_prefix("# ").map(str::trim));
    if let Some(title) = title {
        let slug = kebab_case(title);
        if !slug.is_empty() {
            block = block.with_declared_name(format!("{}.md", slug));
        }
    }

    docs.push(block);
}
