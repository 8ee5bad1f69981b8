//! Generator settings for Producible.
//!
//! Settings name the base type annotated classes must extend, the factory
//! interface the generated types implement, the generated-by marker, and how
//! `create` produces its return value.
//!
//! # Examples
//!
//! ```
//! use producible_core::{CreateStrategy, GeneratorSettings};
//!
//! let settings = GeneratorSettings::default();
//! assert_eq!(settings.base_type, "androidx.lifecycle.ViewModel");
//! assert_eq!(settings.create_strategy, CreateStrategy::Unchecked);
//!
//! let checked = GeneratorSettings::builder()
//!     .create_strategy(CreateStrategy::Checked)
//!     .build();
//! assert!(checked.validate().is_ok());
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Base type every annotated class must extend by default.
pub const DEFAULT_BASE_TYPE: &str = "androidx.lifecycle.ViewModel";

/// Factory interface generated types implement by default.
pub const DEFAULT_FACTORY_INTERFACE: &str = "androidx.lifecycle.ViewModelProvider.Factory";

/// Generated-by marker written at the top of every file by default.
pub const DEFAULT_MARKER: &str = "Generated by Producible";

/// How the generated `create` method satisfies its generic return type.
///
/// # Examples
///
/// ```
/// use producible_core::CreateStrategy;
///
/// let strategy: CreateStrategy = "checked".parse().unwrap();
/// assert_eq!(strategy, CreateStrategy::Checked);
/// assert!("dynamic".parse::<CreateStrategy>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreateStrategy {
    /// Return the constructed instance through an unchecked `as T` cast.
    ///
    /// A mismatched request surfaces as a `ClassCastException` at the call
    /// site.
    #[default]
    Unchecked,
    /// Verify the requested class first and return via `Class.cast`.
    ///
    /// A mismatched request fails inside the factory with a message naming
    /// the requested class.
    Checked,
}

impl CreateStrategy {
    /// Returns the manifest spelling of the strategy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unchecked => "unchecked",
            Self::Checked => "checked",
        }
    }
}

impl fmt::Display for CreateStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CreateStrategy {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unchecked" => Ok(Self::Unchecked),
            "checked" => Ok(Self::Checked),
            _ => Err(Error::InvalidArgument(format!(
                "invalid create strategy: '{s}' (expected: unchecked or checked)"
            ))),
        }
    }
}

/// Settings shared by every factory generated in one batch.
///
/// Missing keys in a manifest `[settings]` table fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Fully qualified base type annotated classes must extend.
    ///
    /// Compared exactly against the declared supertype.
    /// Default: `androidx.lifecycle.ViewModel`
    pub base_type: String,

    /// Fully qualified factory interface implemented by generated types.
    ///
    /// Default: `androidx.lifecycle.ViewModelProvider.Factory`
    pub factory_interface: String,

    /// Text of the generated-by comment.
    ///
    /// Default: `Generated by Producible`
    pub marker: String,

    /// Return strategy of the generated `create` method.
    ///
    /// Default: `unchecked`
    pub create_strategy: CreateStrategy,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            base_type: DEFAULT_BASE_TYPE.to_string(),
            factory_interface: DEFAULT_FACTORY_INTERFACE.to_string(),
            marker: DEFAULT_MARKER.to_string(),
            create_strategy: CreateStrategy::default(),
        }
    }
}

impl GeneratorSettings {
    /// Creates a new settings builder.
    #[must_use]
    pub fn builder() -> GeneratorSettingsBuilder {
        GeneratorSettingsBuilder::new()
    }

    /// Validates the settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if:
    /// - Base type or factory interface is empty
    /// - The marker spans more than one line
    ///
    /// # Examples
    ///
    /// ```
    /// use producible_core::GeneratorSettings;
    ///
    /// assert!(GeneratorSettings::default().validate().is_ok());
    ///
    /// let mut invalid = GeneratorSettings::default();
    /// invalid.base_type = String::new();
    /// assert!(invalid.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.base_type.trim().is_empty() {
            return Err(Error::ConfigError {
                message: "base_type cannot be empty".to_string(),
            });
        }

        if self.factory_interface.trim().is_empty() {
            return Err(Error::ConfigError {
                message: "factory_interface cannot be empty".to_string(),
            });
        }

        if self.marker.contains(['\n', '\r']) {
            return Err(Error::ConfigError {
                message: "marker must be a single line".to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for [`GeneratorSettings`].
///
/// # Examples
///
/// ```
/// use producible_core::GeneratorSettings;
///
/// let settings = GeneratorSettings::builder()
///     .base_type("com.example.BaseViewModel")
///     .marker("Generated, do not edit")
///     .build();
///
/// assert_eq!(settings.base_type, "com.example.BaseViewModel");
/// assert_eq!(settings.marker, "Generated, do not edit");
/// ```
#[derive(Debug)]
pub struct GeneratorSettingsBuilder {
    settings: GeneratorSettings,
}

impl GeneratorSettingsBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            settings: GeneratorSettings::default(),
        }
    }

    /// Sets the required base type.
    #[must_use]
    pub fn base_type(mut self, base_type: impl Into<String>) -> Self {
        self.settings.base_type = base_type.into();
        self
    }

    /// Sets the implemented factory interface.
    #[must_use]
    pub fn factory_interface(mut self, factory_interface: impl Into<String>) -> Self {
        self.settings.factory_interface = factory_interface.into();
        self
    }

    /// Sets the generated-by marker.
    #[must_use]
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.settings.marker = marker.into();
        self
    }

    /// Sets the `create` return strategy.
    #[must_use]
    pub const fn create_strategy(mut self, strategy: CreateStrategy) -> Self {
        self.settings.create_strategy = strategy;
        self
    }

    /// Builds the settings.
    #[must_use]
    pub fn build(self) -> GeneratorSettings {
        self.settings
    }
}

impl Default for GeneratorSettingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
