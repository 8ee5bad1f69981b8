//! Manifest loading.
//!
//! A manifest lists the classes that receive a factory, standing in for
//! annotation scanning inside a compiler. TOML is the default format; files
//! with a `.json` extension are read as JSON.
//!
//! ```toml
//! [settings]
//! create_strategy = "checked"
//!
//! [[symbols]]
//! name = "MainActivityViewModel"
//! package = "com.sxhardha.producibledemo"
//! supertype = "androidx.lifecycle.ViewModel"
//!
//! [[symbols.constructor]]
//! name = "name"
//! type = "retrofit2.Retrofit"
//! ```

use producible_core::{AnnotatedSymbol, Error, GeneratorSettings, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Registration list of annotated symbols plus generator settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Settings shared by every generated factory
    #[serde(default)]
    pub settings: GeneratorSettings,
    /// Annotated symbols in processing order
    #[serde(default)]
    pub symbols: Vec<AnnotatedSymbol>,
}

impl Manifest {
    /// Loads a manifest from disk, choosing the format by file extension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IoError`] if the file cannot be read and
    /// [`Error::ConfigError`] if it cannot be parsed or its settings are
    /// invalid.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::IoError {
            path: path.display().to_string(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let manifest = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };

        tracing::debug!(
            "Loaded manifest {} with {} symbols",
            path.display(),
            manifest.symbols.len()
        );

        Ok(manifest)
    }

    /// Parses a TOML manifest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] on syntax errors, unknown enum values or
    /// invalid settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use producible_cli::manifest::Manifest;
    ///
    /// let manifest = Manifest::from_toml_str(r#"
    ///     [[symbols]]
    ///     name = "HomeViewModel"
    ///     package = "com.example"
    ///     supertype = "androidx.lifecycle.ViewModel"
    ///     constructor = []
    /// "#).unwrap();
    ///
    /// assert_eq!(manifest.symbols.len(), 1);
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let manifest: Self = toml::from_str(content).map_err(|e| Error::ConfigError {
            message: format!("invalid TOML manifest: {e}"),
        })?;
        manifest.settings.validate()?;
        Ok(manifest)
    }

    /// Parses a JSON manifest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] on syntax errors, unknown enum values or
    /// invalid settings.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let manifest: Self = serde_json::from_str(content).map_err(|e| Error::ConfigError {
            message: format!("invalid JSON manifest: {e}"),
        })?;
        manifest.settings.validate()?;
        Ok(manifest)
    }
}
