//! Candidate name resolution for blocks.

use std::path::{Component, Path, PathBuf};

use crate::document::CodeBlock;
use crate::files::ExtensionTable;

/// Picks the raw name candidate and fallback extension for each block.
#[derive(Debug, Clone, Default)]
pub struct NameResolver {
    extensions: ExtensionTable,
}

impl NameResolver {
    pub fn new(extensions: ExtensionTable) -> Self {
        Self { extensions }
    }

    /// Returns `(candidate, fallback_extension)` for a block.
    ///
    /// The candidate is the declared name if present and non-empty,
    /// otherwise the first non-blank body line, otherwise `""`. It is
    /// returned verbatim; sanitization happens later.
    pub fn resolve_candidate<'b>(&self, block: &'b CodeBlock) -> (&'b str, &str) {
        let candidate = block
            .declared_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or_else(|| {
                block
                    .body
                    .iter()
                    .map(String::as_str)
                    .find(|line| !line.trim().is_empty())
            })
            .unwrap_or("");

        (candidate, self.extensions.lookup(block.language.as_deref()))
    }
}

/// Splits a declared name into relative directory segments and the final
/// component.
///
/// Both `/` and `\` separate segments. Empty, `.` and `..` segments are
/// dropped, so the directory never points outside the export root.
pub fn split_declared_path(name: &str) -> (PathBuf, &str) {
    let (dirs, file) = match name.rfind(['/', '\\']) {
        Some(pos) => (&name[..pos], &name[pos + 1..]),
        None => ("", name),
    };

    let directory = dirs
        .split(['/', '\\'])
        .filter(|segment| {
            !segment.is_empty()
                && matches!(Path::new(segment).components().next(), Some(Component::Normal(_)))
        })
        .collect();

    (directory, file)
}
