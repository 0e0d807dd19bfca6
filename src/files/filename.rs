//! Filename sanitization for exported blocks.
//!
//! Turns arbitrary candidate text (import statements, headings, sentence
//! fragments, declared paths) into a filesystem-safe filename that always
//! carries an extension and never exceeds [`MAX_FILENAME_LENGTH`].

/// Maximum length of a sanitized filename, extension included.
pub const MAX_FILENAME_LENGTH: usize = 100;

/// Maximum stem length kept when a name has to be shortened.
pub const MAX_STEM_LENGTH: usize = 95;

/// Fallback stem when sanitization produces an empty result.
pub const FALLBACK_NAME: &str = "untitled";

/// Extension used when a fallback extension has no usable characters.
pub const DEFAULT_EXTENSION: &str = "txt";

/// Longest fallback extension accepted before it is cut down.
const MAX_FALLBACK_EXTENSION_LENGTH: usize = 16;

/// Characters stripped from both ends of a name.
pub(crate) const EDGE_CHARS: &[char] = &['.', '-', '_'];

/// Sanitizes a candidate string into a valid filename.
///
/// Applies the following transformations in order:
/// 1. Every character outside `[A-Za-z0-9._-]` → `_` (one for one)
/// 2. Leading/trailing dots, hyphens and underscores trimmed
/// 3. Empty results → "untitled" fallback
/// 4. Names without a `.` get `.` + `fallback_ext` appended
/// 5. Names over 100 characters have their stem cut to 95 characters
///
/// The text after the last `.` is kept as the extension without further
/// validation, so `sanitize("notes.v1_final", "md")` keeps `v1_final`.
pub fn sanitize(raw: &str, fallback_ext: &str) -> String {
    // Step 1: Positional substitution
    let filtered: String = raw
        .chars()
        .map(|c| if is_allowed(c) { c } else { '_' })
        .collect();

    // Step 2: Trim edges
    let trimmed = trim_edges(&filtered);

    // Step 3: Fallback for empty result
    let name = if trimmed.is_empty() {
        FALLBACK_NAME
    } else {
        trimmed
    };

    // Step 4: Extension enforcement
    let fallback_ext = normalize_extension(fallback_ext);
    let with_ext = if name.contains('.') {
        name.to_string()
    } else {
        format!("{}.{}", name, fallback_ext)
    };

    // Step 5: Length enforcement
    enforce_length(&with_ext, &fallback_ext)
}

/// Returns true if `name` already satisfies every sanitized-name rule.
pub fn is_sanitized(name: &str) -> bool {
    if name.is_empty() || name.len() > MAX_FILENAME_LENGTH {
        return false;
    }
    if !name.chars().all(is_allowed) {
        return false;
    }
    if name.starts_with(EDGE_CHARS) || name.ends_with(EDGE_CHARS) {
        return false;
    }
    match split_extension(name) {
        Some((stem, ext)) => !stem.is_empty() && !ext.is_empty(),
        None => false,
    }
}

/// Splits a filename at its last `.` into `(stem, extension)`.
pub fn split_extension(name: &str) -> Option<(&str, &str)> {
    name.rfind('.').map(|pos| (&name[..pos], &name[pos + 1..]))
}

/// Reduces an extension to ASCII alphanumerics of bounded length.
///
/// Falls back to `txt` when nothing usable remains.
pub fn normalize_extension(ext: &str) -> String {
    let cleaned: String = ext
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(MAX_FALLBACK_EXTENSION_LENGTH)
        .collect();
    if cleaned.is_empty() {
        DEFAULT_EXTENSION.to_string()
    } else {
        cleaned
    }
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_'
}

/// Trims leading and trailing dots, hyphens, and underscores.
fn trim_edges(s: &str) -> &str {
    s.trim_matches(EDGE_CHARS)
}

/// Shortens a name to at most [`MAX_FILENAME_LENGTH`] characters.
///
/// The stem is cut first. An extension too long to fit next to the
/// shortened stem is cut as well so the bound always holds.
fn enforce_length(name: &str, fallback_ext: &str) -> String {
    if name.len() <= MAX_FILENAME_LENGTH {
        return name.to_string();
    }

    let (stem, ext) = split_extension(name).unwrap_or((name, fallback_ext));
    // All characters are ASCII at this point, so byte slicing is safe.
    let stem = &stem[..stem.len().min(MAX_STEM_LENGTH)];

    let room = MAX_FILENAME_LENGTH - stem.len() - 1;
    let ext = fit_extension(ext, room, truncate_chars(fallback_ext, room));

    format!("{}.{}", stem, ext)
}

/// Cuts `ext` to at most `room` characters.
///
/// Trailing `._-` left by the cut are removed; `fallback` is used when
/// nothing remains. `fallback` must itself fit in `room`.
pub(crate) fn fit_extension<'a>(ext: &'a str, room: usize, fallback: &'a str) -> &'a str {
    if ext.chars().count() <= room {
        return ext;
    }
    let cut = truncate_chars(ext, room).trim_end_matches(EDGE_CHARS);
    if cut.is_empty() {
        fallback
    } else {
        cut
    }
}

/// Cuts `s` to at most `max` characters on a char boundary.
pub(crate) fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
