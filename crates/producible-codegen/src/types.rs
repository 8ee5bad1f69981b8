//! Types for factory generation.
//!
//! Defines the generated-file value handed to writers and the contexts used
//! to render the Handlebars templates.
//!
//! # Examples
//!
//! ```
//! use producible_codegen::GeneratedFileDescriptor;
//! use std::path::PathBuf;
//!
//! let file = GeneratedFileDescriptor {
//!     file_name: "HomeViewModelFactory".to_string(),
//!     package_name: "com.example.home".to_string(),
//!     source_text: "class HomeViewModelFactory".to_string(),
//! };
//!
//! assert_eq!(
//!     file.relative_path(),
//!     PathBuf::from("com/example/home/HomeViewModelFactory.kt")
//! );
//! ```

use crate::kotlin;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Extension of generated Kotlin source files.
pub const KOTLIN_EXTENSION: &str = "kt";

/// A generated source file.
///
/// Produced once per validated class and handed to an external writer.
/// It is a plain value: the generator never writes it anywhere itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFileDescriptor {
    /// File name without extension, `<ClassName>Factory`
    pub file_name: String,
    /// Package the generated type is declared in
    pub package_name: String,
    /// Complete Kotlin source text
    pub source_text: String,
}

impl GeneratedFileDescriptor {
    /// Returns the file name without extension.
    #[inline]
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the generated source text.
    #[inline]
    #[must_use]
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    /// Returns the path of the file relative to a source root.
    ///
    /// Package segments become directories and the Kotlin extension is
    /// appended to the file name.
    #[must_use]
    pub fn relative_path(&self) -> PathBuf {
        let mut path = kotlin::package_dir(&self.package_name);
        path.push(format!("{}.{KOTLIN_EXTENSION}", self.file_name));
        path
    }
}

/// Context for rendering the `factory/kotlin` template.
///
/// All names are already escaped and all type names sanitized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactoryContext {
    /// Generated-by marker text
    pub marker: String,
    /// Escaped package name, empty for the default package
    pub package_name: String,
    /// Name of the generated factory type
    pub factory_name: String,
    /// Escaped name of the class being constructed
    pub class_name: String,
    /// Factory interface implemented by the generated type
    pub factory_interface: String,
    /// Upper bound of the `create` type parameter
    pub base_type: String,
    /// Constructor parameters in declaration order
    pub parameters: Vec<ParameterContext>,
    /// Whether `create` verifies the requested class before returning
    pub checked: bool,
}

/// A constructor parameter prepared for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterContext {
    /// Escaped parameter name
    pub name: String,
    /// Sanitized, fully qualified type
    pub type_name: String,
}
