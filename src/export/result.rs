//! Export outcomes and run summaries.

use std::fmt;
use std::path::PathBuf;

use humansize::{format_size, BINARY};
use serde_json::json;

use super::error::ExportError;
use crate::document::BlockKind;

/// Why a block was not written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The block's kind was excluded from this run.
    CategoryDisabled(BlockKind),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CategoryDisabled(kind) => write!(f, "{} export disabled", kind),
        }
    }
}

/// Outcome of exporting one block.
#[derive(Debug)]
pub enum ExportResult {
    Written { path: PathBuf, bytes: usize },
    Skipped(SkipReason),
    Failed(ExportError),
}

impl ExportResult {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Outcome of one block together with where it came from.
#[derive(Debug)]
pub struct BlockReport {
    pub origin_index: usize,
    pub kind: BlockKind,
    pub result: ExportResult,
}

/// Aggregated outcome of an export run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub artifacts: usize,
    pub scripts: usize,
    pub docs: usize,
    pub skipped: usize,
    pub failed: usize,
    pub bytes_written: usize,
    pub reports: Vec<BlockReport>,
}

impl RunSummary {
    /// Adds a block outcome to the counts.
    pub fn record(&mut self, report: BlockReport) {
        match &report.result {
            ExportResult::Written { bytes, .. } => {
                self.bytes_written += bytes;
                match report.kind {
                    BlockKind::Artifact => self.artifacts += 1,
                    BlockKind::Script => self.scripts += 1,
                    BlockKind::Doc => self.docs += 1,
                }
            }
            ExportResult::Skipped(_) => self.skipped += 1,
            ExportResult::Failed(_) => self.failed += 1,
        }
        self.reports.push(report);
    }

    /// Total files written.
    pub fn written(&self) -> usize {
        self.artifacts + self.scripts + self.docs
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// Failed blocks with their errors.
    pub fn failures(&self) -> impl Iterator<Item = (&BlockReport, &ExportError)> {
        self.reports.iter().filter_map(|r| match &r.result {
            ExportResult::Failed(e) => Some((r, e)),
            _ => None,
        })
    }

    /// Machine-readable form for `--json` output.
    pub fn to_json(&self) -> serde_json::Value {
        let failures: Vec<serde_json::Value> = self
            .failures()
            .map(|(report, error)| {
                json!({
                    "line": report.origin_index + 1,
                    "kind": report.kind,
                    "error": error.to_string(),
                })
            })
            .collect();
        let written: Vec<serde_json::Value> = self
            .reports
            .iter()
            .filter_map(|r| match &r.result {
                ExportResult::Written { path, bytes } => Some(json!({
                    "kind": r.kind,
                    "path": path.display().to_string(),
                    "bytes": bytes,
                })),
                _ => None,
            })
            .collect();

        json!({
            "artifacts": self.artifacts,
            "scripts": self.scripts,
            "docs": self.docs,
            "skipped": self.skipped,
            "failed": self.failed,
            "bytes_written": self.bytes_written,
            "written": written,
            "failures": failures,
        })
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Exported {} artifact(s)", self.artifacts)?;
        writeln!(f, "Exported {} script(s)", self.scripts)?;
        writeln!(f, "Generated {} doc(s)", self.docs)?;
        if self.skipped > 0 {
            writeln!(f, "Skipped {} block(s)", self.skipped)?;
        }
        if self.failed > 0 {
            writeln!(f, "Failed {} block(s)", self.failed)?;
        }
        write!(
            f,
            "Wrote {} file(s), {}",
            self.written(),
            format_size(self.bytes_written, BINARY)
        )
    }
}
