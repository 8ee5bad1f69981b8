//! Core types, settings, and errors for Producible.
//!
//! This crate provides the foundational types shared by the factory
//! generator and the command-line front end.
//!
//! # Architecture
//!
//! The core consists of:
//! - Input types handed over by whatever discovers annotated classes
//!   (`AnnotatedSymbol`, `SymbolKind`)
//! - The validated class shape (`ClassDescriptor`, `Parameter`)
//! - Generator settings (`GeneratorSettings`, `CreateStrategy`)
//! - Error hierarchy with contextual information
//! - CLI strong types (`cli::OutputFormat`, `cli::ExitCode`)

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod error;
mod types;

pub mod cli;

pub use config::{CreateStrategy, GeneratorSettings, GeneratorSettingsBuilder};
pub use error::{Error, Result};
pub use types::{AnnotatedSymbol, ClassDescriptor, Parameter, SymbolKind};
