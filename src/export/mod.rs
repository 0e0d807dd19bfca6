//! Export pipeline: name resolution, sanitization, collision handling and
//! writing, with per-block outcomes gathered into a [`RunSummary`].

mod error;
mod exporter;
mod resolver;
mod result;

pub use error::ExportError;
pub use exporter::{ExportOptions, Exporter, KindSelection, Planned, PlannedBlock};
pub use resolver::{split_declared_path, NameResolver};
pub use result::{BlockReport, ExportResult, RunSummary, SkipReason};
