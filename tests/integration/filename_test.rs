//! Tests for filename sanitization and collision handling.

use std::path::Path;

use arx::files::collision::{make_unique, SeenPaths};
use arx::files::filename::{self, is_sanitized, MAX_FILENAME_LENGTH};

// ============================================================================
// Documented Examples
// ============================================================================

#[test]
fn sanitize_import_statement() {
    assert_eq!(
        filename::sanitize("import { defineConfig } from 'vite';", "ts"),
        "import___defineConfig___from__vite.ts"
    );
}

#[test]
fn sanitize_markdown_heading() {
    assert_eq!(
        filename::sanitize("## File Contents", "txt"),
        "File_Contents.txt"
    );
}

#[test]
fn sanitize_heading_with_filename_keeps_extension() {
    assert_eq!(filename::sanitize("### tsconfig.json", "txt"), "tsconfig.json");
}

#[test]
fn sanitize_empty_is_untitled() {
    assert_eq!(filename::sanitize("", "txt"), "untitled.txt");
}

#[test]
fn readme_collision_gets_suffix() {
    let mut seen = SeenPaths::new();
    let first = filename::sanitize("README.md", "md");
    let second = filename::sanitize("README.md", "md");
    let a = make_unique(Path::new("out"), &first, &mut seen).unwrap();
    let b = make_unique(Path::new("out"), &second, &mut seen).unwrap();
    assert_eq!(a.filename, "README.md");
    assert_eq!(b.filename, "README-2.md");
}

// ============================================================================
// Character Filtering Tests
// ============================================================================

#[test]
fn sanitize_substitutes_each_invalid_char() {
    assert_eq!(filename::sanitize("a b", "txt"), "a_b.txt");
    assert_eq!(filename::sanitize("a  b", "txt"), "a__b.txt");
    assert_eq!(filename::sanitize("a/b\\c:d", "txt"), "a_b_c_d.txt");
}

#[test]
fn sanitize_keeps_allowed_punctuation() {
    assert_eq!(filename::sanitize("my-file_v2.rs", "txt"), "my-file_v2.rs");
}

#[test]
fn sanitize_replaces_unicode_per_character() {
    assert_eq!(filename::sanitize("café", "txt"), "caf.txt");
    assert_eq!(filename::sanitize("a日本b", "md"), "a__b.md");
}

#[test]
fn sanitize_emoji_only_is_untitled() {
    assert_eq!(filename::sanitize("🚀🚀", "rs"), "untitled.rs");
}

// ============================================================================
// Trimming Tests
// ============================================================================

#[test]
fn sanitize_trims_edge_runs() {
    assert_eq!(filename::sanitize("..--__name__--..", "txt"), "name.txt");
}

#[test]
fn sanitize_only_invalid_chars_is_untitled() {
    assert_eq!(filename::sanitize("{}();", "js"), "untitled.js");
}

#[test]
fn sanitize_only_edge_chars_is_untitled() {
    assert_eq!(filename::sanitize("...---___", "py"), "untitled.py");
}

#[test]
fn sanitize_trailing_dot_gets_fallback_extension() {
    // The trailing dot is trimmed before extension detection
    assert_eq!(filename::sanitize("notes.", "md"), "notes.md");
}

// ============================================================================
// Extension Tests
// ============================================================================

#[test]
fn sanitize_adds_fallback_extension() {
    assert_eq!(filename::sanitize("Makefile", "txt"), "Makefile.txt");
}

#[test]
fn sanitize_keeps_unvalidated_extension() {
    assert_eq!(filename::sanitize("v1.2 release", "md"), "v1.2_release");
}

#[test]
fn sanitize_normalizes_fallback_extension() {
    assert_eq!(filename::sanitize("name", ".rs"), "name.rs");
    assert_eq!(filename::sanitize("name", ""), "name.txt");
}

// ============================================================================
// Length Tests
// ============================================================================

#[test]
fn sanitize_truncates_long_stem_to_95() {
    let raw = format!("{}.py", "a".repeat(200));
    let result = filename::sanitize(&raw, "txt");
    assert_eq!(result, format!("{}.py", "a".repeat(95)));
}

#[test]
fn sanitize_long_name_without_dot_keeps_fallback() {
    let raw = "word ".repeat(40);
    let result = filename::sanitize(&raw, "md");
    assert!(result.len() <= MAX_FILENAME_LENGTH);
    assert!(result.ends_with(".md"));
}

#[test]
fn sanitize_exactly_100_chars_is_unchanged() {
    let raw = format!("{}.md", "b".repeat(97));
    assert_eq!(raw.len(), 100);
    assert_eq!(filename::sanitize(&raw, "txt"), raw);
}

#[test]
fn sanitize_long_extension_still_bounded() {
    let raw = format!("a.{}", "x".repeat(300));
    let result = filename::sanitize(&raw, "txt");
    assert!(result.len() <= MAX_FILENAME_LENGTH);
    assert!(is_sanitized(&result));
}

#[test]
fn sanitize_long_name_with_separator_extension_stays_bounded() {
    // Four characters of room remain after the stem, all of them underscores
    let raw = format!("{}.____abcdef", "a".repeat(100));
    let result = filename::sanitize(&raw, "typescript");
    assert_eq!(result, format!("{}.type", "a".repeat(95)));
    assert!(is_sanitized(&result));
    assert_eq!(filename::sanitize(&result, "typescript"), result);
}

#[test]
fn collision_suffix_on_full_length_name_stays_bounded() {
    let mut seen = SeenPaths::new();
    let name = format!("a.{}", "b".repeat(98));
    make_unique(Path::new("out"), &name, &mut seen).unwrap();
    let second = make_unique(Path::new("out"), &name, &mut seen).unwrap();
    assert!(second.filename.len() <= MAX_FILENAME_LENGTH);
    assert!(is_sanitized(&second.filename));
}

// ============================================================================
// Validity Tests
// ============================================================================

#[test]
fn sanitized_outputs_are_valid() {
    let inputs = [
        "",
        " ",
        "### tsconfig.json",
        "const x = () => { return 1; };",
        "<div class=\"app\">",
        "Ünïcödé ñame",
        "\t\n\r",
        "a.b.c.d",
    ];
    for input in inputs {
        let result = filename::sanitize(input, "txt");
        assert!(is_sanitized(&result), "{:?} -> {:?}", input, result);
    }
}
