//! Kotlin factory generation for Producible.
//!
//! Turns descriptions of annotated `ViewModel` classes into
//! `ViewModelProvider.Factory` implementations that capture constructor
//! arguments and pass them through to the class constructor.
//!
//! # Pipeline
//!
//! ```text
//! AnnotatedSymbol --ValidationGate--> ClassDescriptor --FactoryGenerator--> GeneratedFileDescriptor
//! ```
//!
//! [`FactoryProcessor`] runs the pipeline over a batch and collects
//! per-symbol [`Diagnostic`]s. Writing files is left to the caller.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod diagnostics;
pub mod generator;
pub mod kotlin;
pub mod processor;
pub mod template_engine;
pub mod types;
pub mod validation;

pub use diagnostics::{Diagnostic, DiagnosticKind, Severity};
pub use generator::FactoryGenerator;
pub use processor::{FactoryProcessor, ProcessingReport};
pub use types::GeneratedFileDescriptor;
pub use validation::ValidationGate;
