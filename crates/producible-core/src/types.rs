//! Domain types describing annotated classes.
//!
//! Two layers are modelled here:
//!
//! - [`AnnotatedSymbol`] is the raw, unvalidated description handed over by
//!   whatever discovered the annotation (a manifest, a source scanner).
//! - [`ClassDescriptor`] is the validated class shape the generator consumes.
//!
//! # Examples
//!
//! ```
//! use producible_core::{ClassDescriptor, Parameter};
//!
//! let descriptor = ClassDescriptor::new(
//!     "MainActivityViewModel",
//!     "com.sxhardha.producibledemo",
//!     "androidx.lifecycle.ViewModel",
//!     vec![
//!         Parameter::new("name", "retrofit2.Retrofit"),
//!         Parameter::new("age", "java.util.Calendar"),
//!     ],
//! );
//!
//! assert_eq!(descriptor.factory_name(), "MainActivityViewModelFactory");
//! assert_eq!(descriptor.parameter_count(), 2);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of the symbol an annotation was applied to.
///
/// Only [`SymbolKind::Class`] can produce a factory.
///
/// # Examples
///
/// ```
/// use producible_core::SymbolKind;
///
/// assert!(SymbolKind::Class.is_class());
/// assert!(!SymbolKind::Interface.is_class());
/// assert_eq!(SymbolKind::AnnotationClass.as_str(), "annotation_class");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    /// A regular class
    #[default]
    Class,
    /// An interface
    Interface,
    /// An enum class
    Enum,
    /// A singleton `object` declaration
    Object,
    /// An annotation class
    AnnotationClass,
    /// A top-level or member function
    Function,
}

impl SymbolKind {
    /// Returns `true` for regular classes.
    #[inline]
    #[must_use]
    pub const fn is_class(self) -> bool {
        matches!(self, Self::Class)
    }

    /// Returns the manifest spelling of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Object => "object",
            Self::AnnotationClass => "annotation_class",
            Self::Function => "function",
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single primary-constructor parameter.
///
/// `type_name` is a fully qualified type reference. Values read from compiled
/// metadata may still contain backtick escaping around reserved words; the
/// generator strips it before emitting source.
///
/// # Examples
///
/// ```
/// use producible_core::Parameter;
///
/// let param = Parameter::new("calendar", "java.util.Calendar");
/// assert_eq!(param.name, "calendar");
/// assert_eq!(param.type_name, "java.util.Calendar");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name as declared
    pub name: String,
    /// Fully qualified parameter type
    #[serde(rename = "type")]
    pub type_name: String,
}

impl Parameter {
    /// Creates a new parameter.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// An annotated symbol as reported by discovery, before validation.
///
/// `constructor` is `None` when no primary constructor could be found, which
/// is distinct from `Some(vec![])` (a constructor without parameters).
///
/// # Examples
///
/// ```
/// use producible_core::{AnnotatedSymbol, Parameter, SymbolKind};
///
/// let symbol = AnnotatedSymbol::class("LoginViewModel", "com.example.login")
///     .with_supertype("androidx.lifecycle.ViewModel")
///     .with_constructor(vec![Parameter::new("api", "com.example.Api")]);
///
/// assert_eq!(symbol.kind, SymbolKind::Class);
/// assert_eq!(symbol.qualified_name(), "com.example.login.LoginViewModel");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedSymbol {
    /// Simple name of the symbol
    pub name: String,
    /// Package the symbol is declared in (empty for the default package)
    #[serde(default)]
    pub package: String,
    /// Kind of declaration the annotation was applied to
    #[serde(default)]
    pub kind: SymbolKind,
    /// Fully qualified name of the declared supertype, if any
    #[serde(default)]
    pub supertype: Option<String>,
    /// Primary constructor parameters in declaration order
    #[serde(default)]
    pub constructor: Option<Vec<Parameter>>,
}

impl AnnotatedSymbol {
    /// Creates a class symbol without supertype or constructor.
    #[must_use]
    pub fn class(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            kind: SymbolKind::Class,
            supertype: None,
            constructor: None,
        }
    }

    /// Sets the symbol kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: SymbolKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the declared supertype.
    #[must_use]
    pub fn with_supertype(mut self, supertype: impl Into<String>) -> Self {
        self.supertype = Some(supertype.into());
        self
    }

    /// Sets the primary constructor parameters.
    #[must_use]
    pub fn with_constructor(mut self, parameters: Vec<Parameter>) -> Self {
        self.constructor = Some(parameters);
        self
    }

    /// Returns the package-qualified name of the symbol.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        qualify(&self.package, &self.name)
    }
}

/// Validated shape of a class that receives a generated factory.
///
/// Parameter order is load-bearing: it defines both the factory constructor
/// signature and the positional call in `create`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassDescriptor {
    /// Simple class name
    pub class_name: String,
    /// Package of the class (empty for the default package)
    pub package_name: String,
    /// Fully qualified name of the declared supertype
    pub declared_supertype: String,
    /// Primary constructor parameters in declaration order
    pub parameters: Vec<Parameter>,
}

impl ClassDescriptor {
    /// Creates a new class descriptor.
    #[must_use]
    pub fn new(
        class_name: impl Into<String>,
        package_name: impl Into<String>,
        declared_supertype: impl Into<String>,
        parameters: Vec<Parameter>,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            package_name: package_name.into(),
            declared_supertype: declared_supertype.into(),
            parameters,
        }
    }

    /// Returns the name of the generated factory type.
    ///
    /// # Examples
    ///
    /// ```
    /// use producible_core::ClassDescriptor;
    ///
    /// let descriptor = ClassDescriptor::new("HomeViewModel", "app", "x.Base", vec![]);
    /// assert_eq!(descriptor.factory_name(), "HomeViewModelFactory");
    /// ```
    #[must_use]
    pub fn factory_name(&self) -> String {
        format!("{}Factory", self.class_name)
    }

    /// Returns the package-qualified class name.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        qualify(&self.package_name, &self.class_name)
    }

    /// Returns the number of constructor parameters.
    #[inline]
    #[must_use]
    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }
}

fn qualify(package: &str, name: &str) -> String {
    if package.is_empty() {
        name.to_string()
    } else {
        format!("{package}.{name}")
    }
}
