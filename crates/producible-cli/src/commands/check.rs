//! Check command implementation.
//!
//! Runs the validation gate and the generator over a manifest without writing
//! anything, reporting what `generate` would reject.

use crate::manifest::Manifest;
use anyhow::{Context, Result};
use producible_codegen::{Diagnostic, FactoryProcessor};
use producible_core::cli::{ExitCode, OutputFormat};
use serde::Serialize;
use std::path::Path;

/// Result of a check run.
#[derive(Debug, Clone, Serialize)]
pub struct CheckSummary {
    /// Manifest the symbols were read from
    pub manifest: String,
    /// Number of symbols in the manifest
    pub symbols: usize,
    /// Number of symbols that would get a factory
    pub valid: usize,
    /// Number of rejected symbols
    pub errors: usize,
    /// Number of warnings
    pub warnings: usize,
    /// All diagnostics in manifest order
    pub diagnostics: Vec<Diagnostic>,
}

/// Checks every symbol of a manifest.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded or its settings are
/// invalid.
pub fn check(manifest_path: &Path) -> Result<CheckSummary> {
    let manifest = Manifest::load(manifest_path)
        .with_context(|| format!("failed to load manifest {}", manifest_path.display()))?;

    let processor = FactoryProcessor::new(manifest.settings)
        .context("failed to initialize factory generator")?;
    let report = processor.process(&manifest.symbols);

    Ok(CheckSummary {
        manifest: manifest_path.display().to_string(),
        symbols: manifest.symbols.len(),
        valid: report.file_count(),
        errors: report.error_count(),
        warnings: report.warning_count(),
        diagnostics: report.diagnostics,
    })
}

/// Runs the check command.
///
/// # Errors
///
/// Returns an error if the check fails or output formatting fails.
pub fn run(manifest_path: &Path, output_format: OutputFormat) -> Result<ExitCode> {
    let summary = check(manifest_path)?;

    super::emit_diagnostics(&summary.diagnostics, output_format);

    let formatted = crate::formatters::format_output(&summary, output_format)?;
    println!("{formatted}");

    Ok(if summary.errors > 0 {
        ExitCode::DIAGNOSTICS
    } else {
        ExitCode::SUCCESS
    })
}
