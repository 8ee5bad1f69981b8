//! Batch processing of annotated symbols.
//!
//! Runs the validation gate and the generator over every symbol of a batch
//! independently. A rejected symbol produces a diagnostic and no file; it
//! never stops the remaining symbols from being processed.
//!
//! # Examples
//!
//! ```
//! use producible_codegen::FactoryProcessor;
//! use producible_core::{AnnotatedSymbol, GeneratorSettings, Parameter, SymbolKind};
//!
//! let processor = FactoryProcessor::new(GeneratorSettings::default()).unwrap();
//! let symbols = vec![
//!     AnnotatedSymbol::class("LoginViewModel", "com.example")
//!         .with_supertype("androidx.lifecycle.ViewModel")
//!         .with_constructor(vec![Parameter::new("api", "com.example.Api")]),
//!     AnnotatedSymbol::class("Repository", "com.example").with_kind(SymbolKind::Interface),
//! ];
//!
//! let report = processor.process(&symbols);
//! assert_eq!(report.file_count(), 1);
//! assert_eq!(report.error_count(), 1);
//! ```

use crate::diagnostics::{Diagnostic, Severity};
use crate::generator::FactoryGenerator;
use crate::types::GeneratedFileDescriptor;
use crate::validation::ValidationGate;
use producible_core::{AnnotatedSymbol, ClassDescriptor, Error, GeneratorSettings, Result};
use serde::Serialize;

/// Outcome of processing one batch.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProcessingReport {
    /// Generated files in input order
    pub files: Vec<GeneratedFileDescriptor>,
    /// Diagnostics in input order
    pub diagnostics: Vec<Diagnostic>,
}

impl ProcessingReport {
    /// Creates an empty report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            files: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Returns the number of generated files.
    #[inline]
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Returns the number of error-severity diagnostics.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    /// Returns the number of warning-severity diagnostics.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Returns `true` if any symbol was rejected.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Returns an iterator over error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

/// Processes batches of annotated symbols into factory files.
#[derive(Debug)]
pub struct FactoryProcessor<'a> {
    gate: ValidationGate,
    generator: FactoryGenerator<'a>,
}

impl<'a> FactoryProcessor<'a> {
    /// Creates a processor for the given settings.
    ///
    /// # Errors
    ///
    /// Returns error if the settings are invalid or template registration
    /// fails.
    pub fn new(settings: GeneratorSettings) -> Result<Self> {
        Ok(Self::with_generator(FactoryGenerator::new(settings)?))
    }

    /// Creates a processor around a prepared generator.
    #[must_use]
    pub fn with_generator(generator: FactoryGenerator<'a>) -> Self {
        Self {
            gate: ValidationGate::from_settings(generator.settings()),
            generator,
        }
    }

    /// Processes every symbol of a batch in order.
    pub fn process(&self, symbols: &[AnnotatedSymbol]) -> ProcessingReport {
        tracing::info!("Processing {} annotated symbols", symbols.len());

        let mut report = ProcessingReport::new();
        for symbol in symbols {
            self.process_symbol(symbol, &mut report);
        }

        tracing::info!(
            "Generated {} factories ({} errors, {} warnings)",
            report.file_count(),
            report.error_count(),
            report.warning_count()
        );

        report
    }

    /// Processes a single symbol, recording its file or diagnostics.
    pub fn process_symbol(&self, symbol: &AnnotatedSymbol, report: &mut ProcessingReport) {
        let qualified_name = symbol.qualified_name();

        let generated = self.gate.check(symbol).and_then(|descriptor| {
            ensure_unique(&descriptor, report)?;
            self.generator.render(&descriptor)
        });

        match generated {
            Ok(file) => {
                if symbol.constructor.is_none() {
                    let warning = Error::MissingConstructor {
                        symbol: symbol.name.clone(),
                    };
                    Self::record(report, Diagnostic::from_error(&qualified_name, &warning));
                }

                tracing::info!("Generated {}", file.relative_path().display());
                report.files.push(file);
            }
            Err(err) => {
                Self::record(report, Diagnostic::from_error(&qualified_name, &err));
            }
        }
    }

    fn record(report: &mut ProcessingReport, diagnostic: Diagnostic) {
        tracing::warn!(symbol = %diagnostic.symbol, "{}", diagnostic.message);
        report.diagnostics.push(diagnostic);
    }
}

/// Rejects a class whose factory is already part of the report.
///
/// Two entries for the same qualified class would map to the same output
/// file, so only the first one is kept.
fn ensure_unique(descriptor: &ClassDescriptor, report: &ProcessingReport) -> Result<()> {
    let factory_name = descriptor.factory_name();
    let duplicate = report.files.iter().any(|file| {
        file.file_name() == factory_name && file.package_name == descriptor.package_name
    });

    if duplicate {
        return Err(Error::InvalidDescriptor {
            symbol: descriptor.class_name.clone(),
            reason: format!("duplicate symbol '{}'", descriptor.qualified_name()),
        });
    }
    Ok(())
}
