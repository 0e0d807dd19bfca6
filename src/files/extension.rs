//! Language tag to file extension mapping.

use std::collections::HashMap;

use super::filename::{normalize_extension, DEFAULT_EXTENSION};

/// Built-in language tag → extension pairs.
const BUILTIN_EXTENSIONS: &[(&str, &str)] = &[
    ("python", "py"),
    ("py", "py"),
    ("javascript", "js"),
    ("js", "js"),
    ("jsx", "jsx"),
    ("typescript", "ts"),
    ("ts", "ts"),
    ("tsx", "tsx"),
    ("bash", "sh"),
    ("sh", "sh"),
    ("shell", "sh"),
    ("zsh", "sh"),
    ("yaml", "yml"),
    ("yml", "yml"),
    ("json", "json"),
    ("toml", "toml"),
    ("sql", "sql"),
    ("html", "html"),
    ("css", "css"),
    ("markdown", "md"),
    ("md", "md"),
    ("rust", "rs"),
    ("rs", "rs"),
    ("go", "go"),
    ("java", "java"),
    ("cpp", "cpp"),
    ("c", "c"),
    ("dockerfile", "dockerfile"),
    ("text", "txt"),
];

/// Immutable mapping from language tag to fallback extension.
///
/// Lookups are case-insensitive. Unknown or missing tags map to `txt`.
#[derive(Debug, Clone)]
pub struct ExtensionTable {
    map: HashMap<String, String>,
}

impl Default for ExtensionTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ExtensionTable {
    /// Creates the table of built-in mappings.
    pub fn builtin() -> Self {
        let map = BUILTIN_EXTENSIONS
            .iter()
            .map(|(tag, ext)| (tag.to_string(), ext.to_string()))
            .collect();
        Self { map }
    }

    /// Creates the built-in table with `overrides` layered on top.
    ///
    /// Tags are lowercased and extensions normalized, so a config entry
    /// like `Kotlin = ".KT"` becomes `kotlin → KT`.
    pub fn with_overrides<'a, I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut table = Self::builtin();
        for (tag, ext) in overrides {
            table
                .map
                .insert(tag.trim().to_lowercase(), normalize_extension(ext));
        }
        table
    }

    /// Returns the extension for `language`, or `txt` if unknown.
    pub fn lookup(&self, language: Option<&str>) -> &str {
        language
            .map(|tag| tag.trim().to_lowercase())
            .and_then(|tag| self.map.get(&tag))
            .map(String::as_str)
            .unwrap_or(DEFAULT_EXTENSION)
    }
}
