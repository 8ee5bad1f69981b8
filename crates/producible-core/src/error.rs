//! Error types for Producible.
//!
//! This module provides the error hierarchy shared by all crates in the
//! workspace. Validation failures carry the offending symbol so they can be
//! turned into per-symbol diagnostics without losing context.
//!
//! # Examples
//!
//! ```
//! use producible_core::{Error, Result};
//!
//! fn require_class(kind: &str) -> Result<()> {
//!     if kind != "class" {
//!         return Err(Error::NotAClass {
//!             symbol: "LoginScreen".to_string(),
//!             kind: kind.to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = require_class("interface").unwrap_err();
//! assert!(err.is_not_a_class());
//! ```

use thiserror::Error;

/// Main error type for Producible.
///
/// All errors in the system use this type, providing consistent error handling
/// across all crates in the workspace.
#[derive(Error, Debug)]
pub enum Error {
    /// The annotation was applied to something other than a class.
    #[error("{symbol}: cannot annotate anything but a class (found {kind})")]
    NotAClass {
        /// Name of the offending symbol
        symbol: String,
        /// Kind the symbol actually has
        kind: String,
    },

    /// The annotated class does not extend the required base type.
    #[error("{symbol} must extend {required}")]
    WrongSupertype {
        /// Name of the offending class
        symbol: String,
        /// Base type the class is required to extend
        required: String,
        /// Supertype the class declares, if any
        found: Option<String>,
    },

    /// No primary constructor was supplied for the class.
    ///
    /// Generation treats this as a zero-parameter constructor; the error is
    /// surfaced as a warning diagnostic rather than aborting.
    #[error("{symbol}: no primary constructor found, assuming no parameters")]
    MissingConstructor {
        /// Name of the class without a constructor
        symbol: String,
    },

    /// The class shape cannot produce compilable source.
    ///
    /// Raised for invalid identifiers, empty type names, or duplicate
    /// parameter names.
    #[error("{symbol}: invalid descriptor: {reason}")]
    InvalidDescriptor {
        /// Name of the offending symbol
        symbol: String,
        /// Detailed reason for the rejection
        reason: String,
    },

    /// Template registration or rendering failed.
    #[error("Template error: {message}")]
    TemplateError {
        /// Description of the template failure
        message: String,
        /// Underlying template engine error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration error.
    ///
    /// Raised when a manifest or settings block is malformed or contains
    /// contradictory values.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Invalid argument error.
    ///
    /// Raised when CLI arguments or function parameters are invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Filesystem operation failed.
    #[error("I/O error at {path}: {source}")]
    IoError {
        /// Path involved in the failed operation
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Returns `true` if this is a not-a-class error.
    ///
    /// # Examples
    ///
    /// ```
    /// use producible_core::Error;
    ///
    /// let err = Error::NotAClass {
    ///     symbol: "Repository".to_string(),
    ///     kind: "interface".to_string(),
    /// };
    /// assert!(err.is_not_a_class());
    /// ```
    #[must_use]
    pub const fn is_not_a_class(&self) -> bool {
        matches!(self, Self::NotAClass { .. })
    }

    /// Returns `true` if this is a wrong-supertype error.
    ///
    /// # Examples
    ///
    /// ```
    /// use producible_core::Error;
    ///
    /// let err = Error::WrongSupertype {
    ///     symbol: "Presenter".to_string(),
    ///     required: "androidx.lifecycle.ViewModel".to_string(),
    ///     found: Some("kotlin.Any".to_string()),
    /// };
    /// assert!(err.is_wrong_supertype());
    /// ```
    #[must_use]
    pub const fn is_wrong_supertype(&self) -> bool {
        matches!(self, Self::WrongSupertype { .. })
    }

    /// Returns `true` if this is a missing-constructor error.
    #[must_use]
    pub const fn is_missing_constructor(&self) -> bool {
        matches!(self, Self::MissingConstructor { .. })
    }

    /// Returns `true` if this is an invalid-descriptor error.
    ///
    /// # Examples
    ///
    /// ```
    /// use producible_core::Error;
    ///
    /// let err = Error::InvalidDescriptor {
    ///     symbol: "HomeViewModel".to_string(),
    ///     reason: "duplicate parameter 'id'".to_string(),
    /// };
    /// assert!(err.is_invalid_descriptor());
    /// ```
    #[must_use]
    pub const fn is_invalid_descriptor(&self) -> bool {
        matches!(self, Self::InvalidDescriptor { .. })
    }

    /// Returns `true` if this is a template error.
    #[must_use]
    pub const fn is_template_error(&self) -> bool {
        matches!(self, Self::TemplateError { .. })
    }

    /// Returns `true` if this is a configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use producible_core::Error;
    ///
    /// let err = Error::ConfigError {
    ///     message: "unknown create strategy".to_string(),
    /// };
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }
}

/// Result type alias for Producible operations.
///
/// # Examples
///
/// ```
/// use producible_core::{Result, Error};
///
/// fn non_empty(value: &str) -> Result<&str> {
///     if value.is_empty() {
///         return Err(Error::InvalidArgument("empty value".to_string()));
///     }
///     Ok(value)
/// }
///
/// assert!(non_empty("x").is_ok());
/// assert!(non_empty("").is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;
