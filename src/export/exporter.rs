//! Export orchestrator.
//!
//! Runs every block through name resolution, sanitization and collision
//! handling, then writes it. A failing block is recorded and the run moves
//! on to the next one.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use super::error::ExportError;
use super::resolver::{split_declared_path, NameResolver};
use super::result::{BlockReport, ExportResult, RunSummary, SkipReason};
use crate::document::{BlockKind, CodeBlock};
use crate::files::{make_unique, sanitize, ExportPath, SeenPaths};

/// Directory for artifacts that carry no declared path.
const ARTIFACTS_DIR: &str = "artifacts";

/// Mode applied to shell scripts after writing.
#[cfg(unix)]
const EXECUTABLE_MODE: u32 = 0o755;

/// Which block kinds a run exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindSelection {
    pub artifacts: bool,
    pub scripts: bool,
    pub docs: bool,
}

impl Default for KindSelection {
    fn default() -> Self {
        Self::all()
    }
}

impl KindSelection {
    pub fn all() -> Self {
        Self {
            artifacts: true,
            scripts: true,
            docs: true,
        }
    }

    /// Selects a single kind.
    pub fn only(kind: BlockKind) -> Self {
        Self {
            artifacts: kind == BlockKind::Artifact,
            scripts: kind == BlockKind::Script,
            docs: kind == BlockKind::Doc,
        }
    }

    pub fn includes(&self, kind: BlockKind) -> bool {
        match kind {
            BlockKind::Artifact => self.artifacts,
            BlockKind::Script => self.scripts,
            BlockKind::Doc => self.docs,
        }
    }
}

/// Settings for an export run.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Subdirectory of the root for scripts.
    pub scripts_dir: PathBuf,
    /// Subdirectory of the root for docs.
    pub docs_dir: PathBuf,
    pub kinds: KindSelection,
    /// Mark shell scripts executable (Unix only).
    pub executable_scripts: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            scripts_dir: PathBuf::from("scripts"),
            docs_dir: PathBuf::from("docs"),
            kinds: KindSelection::all(),
            executable_scripts: true,
        }
    }
}

/// Planned destination (or early outcome) for one block.
#[derive(Debug)]
pub enum Planned {
    Path(ExportPath),
    Skipped(SkipReason),
    Failed(ExportError),
}

/// A block paired with its planned destination.
#[derive(Debug)]
pub struct PlannedBlock<'a> {
    pub block: &'a CodeBlock,
    pub planned: Planned,
}

/// Orchestrates export of parsed blocks to disk.
#[derive(Debug, Clone, Default)]
pub struct Exporter {
    resolver: NameResolver,
    options: ExportOptions,
}

impl Exporter {
    pub fn new(resolver: NameResolver, options: ExportOptions) -> Self {
        Self { resolver, options }
    }

    /// Computes the destination of every block without touching disk.
    ///
    /// Resolution and sanitization run in parallel; uniqueness is then
    /// assigned sequentially in document order so suffixes are stable.
    pub fn plan<'a>(&self, blocks: &'a [CodeBlock], root: &Path) -> Vec<PlannedBlock<'a>> {
        let named: Vec<Option<(PathBuf, String)>> = blocks
            .par_iter()
            .map(|block| {
                self.options
                    .kinds
                    .includes(block.kind)
                    .then(|| self.name_block(block, root))
            })
            .collect();

        let mut seen = SeenPaths::new();
        blocks
            .iter()
            .zip(named)
            .map(|(block, named)| {
                let planned = match named {
                    None => Planned::Skipped(SkipReason::CategoryDisabled(block.kind)),
                    Some((directory, filename)) => {
                        match make_unique(&directory, &filename, &mut seen) {
                            Ok(path) => Planned::Path(path),
                            Err(e) => Planned::Failed(e.into()),
                        }
                    }
                };
                PlannedBlock { block, planned }
            })
            .collect()
    }

    /// Exports every block under `root` and returns the run summary.
    ///
    /// Never fails as a whole; per-block errors are in the summary.
    pub fn export_all(&self, blocks: &[CodeBlock], root: &Path) -> RunSummary {
        let mut summary = RunSummary::default();

        for PlannedBlock { block, planned } in self.plan(blocks, root) {
            let result = match planned {
                Planned::Skipped(reason) => {
                    tracing::debug!(line = block.origin_index + 1, %reason, "Skipped block");
                    ExportResult::Skipped(reason)
                }
                Planned::Failed(e) => ExportResult::Failed(e),
                Planned::Path(path) => match self.write_block(block, &path) {
                    Ok(bytes) => {
                        tracing::info!(path = %path, bytes, "Exported {}", block.kind);
                        ExportResult::Written {
                            path: path.path(),
                            bytes,
                        }
                    }
                    Err(e) => ExportResult::Failed(e),
                },
            };

            if let ExportResult::Failed(e) = &result {
                tracing::warn!(line = block.origin_index + 1, "Export failed: {}", e);
            }

            summary.record(BlockReport {
                origin_index: block.origin_index,
                kind: block.kind,
                result,
            });
        }

        summary
    }

    /// Directory and sanitized filename for a block, before uniqueness.
    fn name_block(&self, block: &CodeBlock, root: &Path) -> (PathBuf, String) {
        let (candidate, fallback_ext) = self.resolver.resolve_candidate(block);

        let has_declared = block
            .declared_name
            .as_deref()
            .is_some_and(|name| !name.is_empty());
        let (subdir, component) = if has_declared {
            split_declared_path(candidate)
        } else {
            (PathBuf::new(), candidate)
        };

        let base = match block.kind {
            BlockKind::Artifact if has_declared => root.to_path_buf(),
            BlockKind::Artifact => root.join(ARTIFACTS_DIR),
            BlockKind::Script => root.join(&self.options.scripts_dir),
            BlockKind::Doc => root.join(&self.options.docs_dir),
        };

        let filename = sanitize(component, fallback_ext);
        tracing::debug!(
            line = block.origin_index + 1,
            candidate,
            filename = %filename,
            "Resolved name"
        );
        let directory = if subdir.as_os_str().is_empty() {
            base
        } else {
            base.join(subdir)
        };
        (directory, filename)
    }

    /// Creates the parent directory and writes the block contents.
    fn write_block(&self, block: &CodeBlock, path: &ExportPath) -> Result<usize, ExportError> {
        fs::create_dir_all(&path.directory).map_err(|source| ExportError::CreateDirectory {
            path: path.directory.clone(),
            source,
        })?;

        let full = path.path();
        let contents = block.contents();
        fs::write(&full, &contents).map_err(|source| ExportError::Write {
            path: full.clone(),
            source,
        })?;

        if self.options.executable_scripts && block.kind == BlockKind::Script && block.is_shell() {
            make_executable(&full)?;
        }

        Ok(contents.len())
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<(), ExportError> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(EXECUTABLE_MODE)).map_err(|source| {
        ExportError::Permissions {
            path: path.to_path_buf(),
            source,
        }
    })
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<(), ExportError> {
    Ok(())
}
