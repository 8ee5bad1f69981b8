//! Producible CLI.
//!
//! Generates Kotlin `ViewModelProvider.Factory` implementations for the view
//! models listed in a manifest.
//!
//! # Architecture
//!
//! The CLI is organized around subcommands:
//! - `generate` - Write one `<ClassName>Factory.kt` per valid symbol
//! - `check` - Report what `generate` would reject, without writing
//! - `completions` - Generate shell completions
//!
//! # Examples
//!
//! ```bash
//! # Generate into the default output directory
//! producible generate --manifest producible.toml
//!
//! # Validate a manifest in CI
//! producible --format json check --manifest producible.toml
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use producible_cli::commands;
use producible_core::cli::{ExitCode, OutputFormat};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Producible - ViewModel factory generator for Kotlin.
#[derive(Parser, Debug)]
#[command(name = "producible")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (json, text, pretty)
    #[arg(long = "format", global = true, default_value = "pretty")]
    format: String,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate factories for every valid symbol of a manifest.
    ///
    /// Files of valid symbols are written even if other symbols are
    /// rejected; the exit code is then 1.
    Generate {
        /// Path to the manifest (TOML, or JSON with a .json extension)
        #[arg(short, long)]
        manifest: PathBuf,

        /// Output directory for generated sources
        /// (default: build/generated/producible)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// List the files that would be written without writing them
        #[arg(long)]
        dry_run: bool,
    },

    /// Validate a manifest without generating anything.
    Check {
        /// Path to the manifest
        #[arg(short, long)]
        manifest: PathBuf,
    },

    /// Generate shell completions.
    ///
    /// ```bash
    /// producible completions bash > /etc/bash_completion.d/producible
    /// ```
    Completions {
        /// Target shell for completion generation
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("error: {e:#}");
        std::process::exit(ExitCode::INVALID_INPUT.as_i32());
    }

    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            producible_cli::exit_code_for(&e)
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn run(cli: Cli) -> Result<ExitCode> {
    let output_format = cli.format.parse::<OutputFormat>()?;
    execute_command(cli.command, output_format)
}

/// Initializes logging infrastructure.
///
/// `--verbose` forces the debug level; otherwise `RUST_LOG` applies, falling
/// back to `warn` so summaries stay readable.
fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}

/// Routes commands to their handlers.
fn execute_command(command: Commands, output_format: OutputFormat) -> Result<ExitCode> {
    match command {
        Commands::Generate {
            manifest,
            out,
            dry_run,
        } => commands::generate::run(&manifest, out, dry_run, output_format),
        Commands::Check { manifest } => commands::check::run(&manifest, output_format),
        Commands::Completions { shell } => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            commands::completions::run(shell, &mut cmd)
        }
    }
}
