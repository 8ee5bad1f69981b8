//! Generate command implementation.
//!
//! Generates one `<ClassName>Factory.kt` per valid manifest symbol:
//! 1. Loads the manifest and its generator settings
//! 2. Runs the batch processor over every symbol
//! 3. Writes the generated files below the output directory
//!
//! Files of valid symbols are written even when other symbols are rejected;
//! the command then exits with [`ExitCode::DIAGNOSTICS`].

use crate::manifest::Manifest;
use crate::writer;
use anyhow::{Context, Result};
use producible_codegen::{Diagnostic, FactoryProcessor};
use producible_core::cli::{ExitCode, OutputFormat};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "build/generated/producible";

/// Result of a generate run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationSummary {
    /// Manifest the symbols were read from
    pub manifest: String,
    /// Root directory of the generated sources
    pub output_dir: String,
    /// Whether files were only listed, not written
    pub dry_run: bool,
    /// Number of symbols in the manifest
    pub symbols: usize,
    /// Generated files, written or planned, in manifest order
    pub files: Vec<String>,
    /// Number of rejected symbols
    pub errors: usize,
    /// Number of warnings
    pub warnings: usize,
    /// All diagnostics in manifest order
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationSummary {
    /// Returns the exit code for this run.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        if self.errors > 0 {
            ExitCode::DIAGNOSTICS
        } else {
            ExitCode::SUCCESS
        }
    }
}

/// Processes a manifest and writes the generated files.
///
/// With `dry_run` set, nothing touches the filesystem and `files` lists the
/// paths that would have been written.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded, its settings are
/// invalid, or a file cannot be written. Rejected symbols are not errors;
/// they are reported in the summary.
///
/// # Examples
///
/// ```no_run
/// use producible_cli::commands::generate;
/// use std::path::Path;
///
/// let summary = generate::generate(
///     Path::new("producible.toml"),
///     Path::new("build/generated/producible"),
///     false,
/// )?;
/// println!("{} files", summary.files.len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn generate(manifest_path: &Path, out_dir: &Path, dry_run: bool) -> Result<GenerationSummary> {
    let manifest = Manifest::load(manifest_path)
        .with_context(|| format!("failed to load manifest {}", manifest_path.display()))?;

    let processor = FactoryProcessor::new(manifest.settings)
        .context("failed to initialize factory generator")?;
    let report = processor.process(&manifest.symbols);

    let paths: Vec<PathBuf> = if dry_run {
        report
            .files
            .iter()
            .map(|file| out_dir.join(file.relative_path()))
            .collect()
    } else {
        writer::write_files(out_dir, &report.files)
            .with_context(|| format!("failed to write into {}", out_dir.display()))?
    };

    info!(
        "Generated {} factories from {} symbols{}",
        paths.len(),
        manifest.symbols.len(),
        if dry_run { " (dry run)" } else { "" }
    );

    Ok(GenerationSummary {
        manifest: manifest_path.display().to_string(),
        output_dir: out_dir.display().to_string(),
        dry_run,
        symbols: manifest.symbols.len(),
        files: paths.iter().map(|p| p.display().to_string()).collect(),
        errors: report.error_count(),
        warnings: report.warning_count(),
        diagnostics: report.diagnostics,
    })
}

/// Runs the generate command.
///
/// # Errors
///
/// Returns an error if generation fails or output formatting fails.
pub fn run(
    manifest_path: &Path,
    out_dir: Option<PathBuf>,
    dry_run: bool,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let out_dir = out_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
    let summary = generate(manifest_path, &out_dir, dry_run)?;

    super::emit_diagnostics(&summary.diagnostics, output_format);

    let formatted = crate::formatters::format_output(&summary, output_format)?;
    println!("{formatted}");

    Ok(summary.exit_code())
}
