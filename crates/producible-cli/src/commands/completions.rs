//! Shell completion generation command.
//!
//! Generates shell completion scripts for bash, zsh, fish, elvish and
//! `PowerShell`.

use anyhow::Result;
use clap::Command;
use clap_complete::{Shell, generate};
use producible_core::cli::ExitCode;
use std::io::{self, Write};
use tracing::info;

/// Writes the completion script for `shell` to `out`.
///
/// # Examples
///
/// ```
/// use clap::Command;
/// use clap_complete::Shell;
/// use producible_cli::commands::completions;
///
/// let mut cmd = Command::new("producible").subcommand(Command::new("generate"));
/// let mut buffer = Vec::new();
/// completions::generate_completions(Shell::Bash, &mut cmd, &mut buffer);
/// assert!(String::from_utf8(buffer).unwrap().contains("producible"));
/// ```
pub fn generate_completions(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    info!("Generating {} completions", shell);
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, out);
}

/// Runs the completions command, printing the script to stdout.
pub fn run(shell: Shell, cmd: &mut Command) -> Result<ExitCode> {
    generate_completions(shell, cmd, &mut io::stdout());
    Ok(ExitCode::SUCCESS)
}
