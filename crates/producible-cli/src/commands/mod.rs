//! Command implementations for the Producible CLI.
//!
//! Each command loads its input, runs the codegen pipeline and prints a
//! summary in the requested output format. In text and pretty modes the
//! diagnostics are also reported on stderr, compiler style; JSON output
//! carries them inside the summary only.

pub mod check;
pub mod completions;
pub mod generate;

use crate::formatters::format_diagnostic;
use producible_codegen::Diagnostic;
use producible_core::cli::OutputFormat;

pub(crate) fn emit_diagnostics(diagnostics: &[Diagnostic], format: OutputFormat) {
    if format == OutputFormat::Json {
        return;
    }
    for diagnostic in diagnostics {
        eprintln!("{}", format_diagnostic(diagnostic, format));
    }
}
