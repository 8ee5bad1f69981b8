//! Per-symbol diagnostics.
//!
//! A failing symbol produces a diagnostic instead of aborting the batch.
//! Whether error-severity diagnostics break the build is left to the caller.

use producible_core::Error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// No file was generated for the symbol
    Error,
    /// A file was generated, but an assumption was made
    Warning,
}

impl Severity {
    /// Returns the lowercase name of the severity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule a diagnostic reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The annotation was applied to a non-class symbol
    NotAClass,
    /// The class does not extend the required base type
    WrongSupertype,
    /// No primary constructor was found
    MissingConstructor,
    /// The class shape cannot be emitted as Kotlin
    InvalidDescriptor,
    /// Rendering failed for an otherwise valid class
    GenerationFailed,
}

/// A message about one symbol of a batch.
///
/// # Examples
///
/// ```
/// use producible_codegen::{Diagnostic, DiagnosticKind, Severity};
/// use producible_core::Error;
///
/// let err = Error::NotAClass {
///     symbol: "Repository".to_string(),
///     kind: "interface".to_string(),
/// };
/// let diagnostic = Diagnostic::from_error("com.example.Repository", &err);
///
/// assert_eq!(diagnostic.kind, DiagnosticKind::NotAClass);
/// assert_eq!(diagnostic.severity, Severity::Error);
/// assert!(diagnostic.message.contains("cannot annotate anything but a class"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity of the diagnostic
    pub severity: Severity,
    /// Rule that was violated
    pub kind: DiagnosticKind,
    /// Qualified name of the offending symbol
    pub symbol: String,
    /// Human-readable message
    pub message: String,
}

impl Diagnostic {
    /// Builds a diagnostic from an error raised while processing `symbol`.
    ///
    /// Missing constructors are warnings; everything else is an error.
    #[must_use]
    pub fn from_error(symbol: impl Into<String>, error: &Error) -> Self {
        let kind = match error {
            Error::NotAClass { .. } => DiagnosticKind::NotAClass,
            Error::WrongSupertype { .. } => DiagnosticKind::WrongSupertype,
            Error::MissingConstructor { .. } => DiagnosticKind::MissingConstructor,
            Error::InvalidDescriptor { .. } => DiagnosticKind::InvalidDescriptor,
            _ => DiagnosticKind::GenerationFailed,
        };
        let severity = if error.is_missing_constructor() {
            Severity::Warning
        } else {
            Severity::Error
        };

        Self {
            severity,
            kind,
            symbol: symbol.into(),
            message: error.to_string(),
        }
    }

    /// Returns `true` for error-severity diagnostics.
    #[inline]
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_supertype_diagnostic() {
        let err = Error::WrongSupertype {
            symbol: "Presenter".to_string(),
            required: "androidx.lifecycle.ViewModel".to_string(),
            found: None,
        };
        let diagnostic = Diagnostic::from_error("p.Presenter", &err);

        assert_eq!(diagnostic.kind, DiagnosticKind::WrongSupertype);
        assert!(diagnostic.is_error());
        assert_eq!(
            diagnostic.to_string(),
            "error: Presenter must extend androidx.lifecycle.ViewModel"
        );
    }

    #[test]
    fn test_missing_constructor_is_warning() {
        let err = Error::MissingConstructor {
            symbol: "A".to_string(),
        };
        let diagnostic = Diagnostic::from_error("A", &err);
        assert_eq!(diagnostic.severity, Severity::Warning);
        assert!(!diagnostic.is_error());
    }

    #[test]
    fn test_template_failure_maps_to_generation_failed() {
        let err = Error::TemplateError {
            message: "missing variable".to_string(),
            source: None,
        };
        let diagnostic = Diagnostic::from_error("A", &err);
        assert_eq!(diagnostic.kind, DiagnosticKind::GenerationFailed);
        assert!(diagnostic.is_error());
    }

    #[test]
    fn test_serialized_spelling() {
        let err = Error::InvalidDescriptor {
            symbol: "A".to_string(),
            reason: "bad".to_string(),
        };
        let json = serde_json::to_value(Diagnostic::from_error("A", &err)).unwrap();
        assert_eq!(json["kind"], "invalid_descriptor");
        assert_eq!(json["severity"], "error");
    }
}
