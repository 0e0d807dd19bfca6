//! Kebab-case slugs for document titles.

use deunicode::deunicode;

/// Converts a title into a lowercase kebab-case slug.
///
/// Applies the following transformations in order:
/// 1. Unicode → ASCII transliteration
/// 2. Characters other than alphanumerics, whitespace, `-` and `_` removed
/// 3. Runs of whitespace and underscores → single hyphen
/// 4. Lowercased, leading/trailing hyphens trimmed
///
/// Returns an empty string when nothing usable remains.
pub fn kebab_case(title: &str) -> String {
    let ascii = deunicode(title);

    let mut result = String::with_capacity(ascii.len());
    let mut last_was_hyphen = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if c.is_whitespace() || c == '_' || c == '-' {
            if !last_was_hyphen {
                result.push('-');
                last_was_hyphen = true;
            }
        }
        // Punctuation and symbols are dropped
    }

    result.trim_matches('-').to_string()
}
