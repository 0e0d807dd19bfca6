//! Filename handling: sanitization, extension lookup, slugs and
//! run-scoped collision resolution.

pub mod collision;
pub mod extension;
pub mod filename;
pub mod slug;

pub use collision::{make_unique, CollisionExhausted, ExportPath, SeenPaths};
pub use extension::ExtensionTable;
pub use filename::sanitize;
