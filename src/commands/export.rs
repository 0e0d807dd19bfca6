//! Export command handler

use std::process::ExitCode;

use anyhow::Result;

use arx::cli::ExportArgs;
use arx::document::{self, BlockKind};
use arx::{Config, Exporter};

use super::list::print_plan;

/// Exit status for `--strict` runs with failed blocks.
const EXIT_BLOCK_FAILURES: u8 = 3;

/// Parse the export file and write its blocks.
pub fn handle(args: &ExportArgs) -> Result<ExitCode> {
    let config = Config::load()?;
    let doc = document::load(&args.file)?;

    let root = args
        .output_dir
        .clone()
        .unwrap_or_else(|| config.export.output_dir.clone());
    let exporter = Exporter::new(config.resolver(), config.export_options(args.kinds()));

    if let Some(title) = &doc.title {
        tracing::info!(title = %title, "Parsed conversation");
    }
    for (key, value) in &doc.metadata {
        tracing::debug!(key = %key, value = %value, "Metadata");
    }

    if args.dry_run {
        print_plan(&exporter.plan(&doc.blocks, &root));
        return Ok(ExitCode::SUCCESS);
    }

    if !args.json {
        println!("Parsing: {}", args.file.display());
        println!("Found {} artifacts", doc.count(BlockKind::Artifact));
        println!("Found {} code blocks", doc.count(BlockKind::Script));
        println!("Found {} responses", doc.count(BlockKind::Doc));
        println!();
    }

    let summary = exporter.export_all(&doc.blocks, &root);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary.to_json())?);
    } else {
        println!("{}", summary);
        for (report, error) in summary.failures() {
            eprintln!("line {}: {}", report.origin_index + 1, error);
        }
    }

    if args.strict && summary.has_failures() {
        return Ok(ExitCode::from(EXIT_BLOCK_FAILURES));
    }
    Ok(ExitCode::SUCCESS)
}
