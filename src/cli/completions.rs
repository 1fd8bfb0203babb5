//! Completions command implementation

use crate::cli::{Cli, CompletionsArgs};
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::{self, Write};

/// Completion script for `shell`, registered under the binary's own name.
pub fn write_completions(shell: Shell, out: &mut dyn Write) -> io::Result<()> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    let mut script = Vec::new();
    generate(shell, &mut cmd, bin_name, &mut script);
    out.write_all(&script)?;
    out.flush()
}

/// Handle `rng-analyzer completions` command
pub fn handle_completions(args: &CompletionsArgs) -> Result<(), Box<dyn std::error::Error>> {
    write_completions(args.shell, &mut io::stdout().lock())?;
    Ok(())
}
