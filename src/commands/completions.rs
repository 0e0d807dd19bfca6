//! Shell completion generation

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use arx::cli::Cli;

/// Write completions for `shell` to stdout.
pub fn handle(shell: Shell) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    generate(shell, &mut command, name, &mut std::io::stdout());
}
