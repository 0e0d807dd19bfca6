//! List command handler

use std::path::Path;

use anyhow::Result;

use arx::document;
use arx::export::{Exporter, KindSelection, Planned, PlannedBlock};
use arx::Config;

/// Print where each block of `file` would be written.
pub fn handle(file: &Path) -> Result<()> {
    let config = Config::load()?;
    let doc = document::load(file)?;
    let exporter = Exporter::new(config.resolver(), config.export_options(KindSelection::all()));

    let plan = exporter.plan(&doc.blocks, &config.export.output_dir);
    print_plan(&plan);
    Ok(())
}

/// Print one line per planned block: source line, kind, destination.
pub fn print_plan(plan: &[PlannedBlock<'_>]) {
    if plan.is_empty() {
        println!("No blocks found.");
        return;
    }
    for PlannedBlock { block, planned } in plan {
        let target = match planned {
            Planned::Path(path) => path.to_string(),
            Planned::Skipped(reason) => format!("(skipped: {})", reason),
            Planned::Failed(e) => format!("(failed: {})", e),
        };
        println!(
            "{:>5}  {:<8}  {}",
            block.origin_index + 1,
            block.kind.label(),
            target
        );
    }
}
