//! Data structures for parsed conversation exports.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Category of an exported block, which decides where it is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// File introduced by a path heading (`## src/app.ts`)
    Artifact,
    /// Standalone fenced code block
    Script,
    /// Prose section of the conversation
    Doc,
}

impl BlockKind {
    /// Label for display/logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Artifact => "artifact",
            Self::Script => "script",
            Self::Doc => "doc",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One block of file content found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    pub kind: BlockKind,
    /// Filename or path the document itself associates with the block.
    pub declared_name: Option<String>,
    /// Language tag from the fence info string.
    pub language: Option<String>,
    pub body: Vec<String>,
    /// 0-based line number where the block starts in the source.
    pub origin_index: usize,
}

impl CodeBlock {
    pub fn new(kind: BlockKind, origin_index: usize) -> Self {
        Self {
            kind,
            declared_name: None,
            language: None,
            body: Vec::new(),
            origin_index,
        }
    }

    pub fn with_declared_name(mut self, name: impl Into<String>) -> Self {
        self.declared_name = Some(name.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_body<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.body = lines.into_iter().map(Into::into).collect();
        self
    }

    /// File contents: body lines joined with `\n`, newline-terminated
    /// unless the body is empty.
    pub fn contents(&self) -> String {
        if self.body.is_empty() {
            return String::new();
        }
        let mut text = self.body.join("\n");
        text.push('\n');
        text
    }

    /// Whether the block holds a shell script.
    pub fn is_shell(&self) -> bool {
        matches!(
            self.language.as_deref().map(str::to_lowercase).as_deref(),
            Some("bash" | "sh" | "shell" | "zsh")
        )
    }
}

/// A parsed conversation export.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Text of the first `# ` heading.
    pub title: Option<String>,
    /// `**Created:**`-style fields, keyed by lowercase name.
    pub metadata: BTreeMap<String, String>,
    /// Blocks in document order.
    pub blocks: Vec<CodeBlock>,
}

impl Document {
    /// Number of blocks of the given kind.
    pub fn count(&self, kind: BlockKind) -> usize {
        self.blocks.iter().filter(|b| b.kind == kind).count()
    }
}
