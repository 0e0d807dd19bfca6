//! Command-line interface definitions.
//!
//! Lives in the library so `xtask` can render the man page from it.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::document::BlockKind;
use crate::export::KindSelection;

/// Version string shown by `--version`.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("ARX_BUILD_DATE"),
    ")"
);

/// Version string shown by `--version`.
#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("ARX_BUILD_DATE"),
    ")"
);

#[derive(Debug, Parser)]
#[command(
    name = "arx",
    version = VERSION,
    about = "Extract code blocks, artifacts and docs from conversation exports into files"
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Export blocks from a markdown export into files
    Export(ExportArgs),

    /// List the files an export would write, without writing them
    List {
        /// Markdown export file
        file: PathBuf,
    },

    /// Show configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Markdown export file
    pub file: PathBuf,

    /// Output directory (default: from config, else current directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Only export artifacts (skip scripts and docs)
    #[arg(long, conflicts_with_all = ["scripts_only", "docs_only"])]
    pub artifacts_only: bool,

    /// Only export scripts (skip artifacts and docs)
    #[arg(long, conflicts_with = "docs_only")]
    pub scripts_only: bool,

    /// Only export docs (skip artifacts and scripts)
    #[arg(long)]
    pub docs_only: bool,

    /// Print planned paths instead of writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with status 3 if any block failed
    #[arg(long)]
    pub strict: bool,
}

impl ExportArgs {
    /// Kinds selected by the `--*-only` flags.
    pub fn kinds(&self) -> KindSelection {
        if self.artifacts_only {
            KindSelection::only(BlockKind::Artifact)
        } else if self.scripts_only {
            KindSelection::only(BlockKind::Script)
        } else if self.docs_only {
            KindSelection::only(BlockKind::Doc)
        } else {
            KindSelection::all()
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
}
