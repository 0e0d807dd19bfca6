//! ARX - Artifact Exporter
//!
//! Extracts artifacts, code blocks and prose sections from markdown
//! conversation exports and writes each one to its own file. Names are
//! inferred when the document declares none, then sanitized and made
//! unique so every block lands at a safe, distinct path.

pub mod cli;
pub mod config;
pub mod document;
pub mod export;
pub mod files;

pub use config::Config;
pub use document::{BlockKind, CodeBlock, Document};
pub use export::{ExportOptions, Exporter, NameResolver, RunSummary};
