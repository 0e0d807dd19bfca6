//! Per-block export errors.

use std::path::PathBuf;

use crate::files::CollisionExhausted;

/// Errors that can occur while exporting a single block.
///
/// None of these abort a run; each is recorded against its block.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to set permissions on {path}: {source}")]
    Permissions {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Collision(#[from] CollisionExhausted),
}
