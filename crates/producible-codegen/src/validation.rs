//! Validation gate for annotated symbols.
//!
//! Rejects symbols that cannot produce a valid factory before any generation
//! is attempted:
//!
//! 1. The symbol must be a class.
//! 2. Its declared supertype must match the required base type exactly.
//! 3. Its shape must be expressible in Kotlin (valid identifiers, non-empty
//!    type references, unique parameter names).
//!
//! # Examples
//!
//! ```
//! use producible_codegen::ValidationGate;
//! use producible_core::{AnnotatedSymbol, Parameter, SymbolKind};
//!
//! let gate = ValidationGate::new("androidx.lifecycle.ViewModel");
//!
//! let symbol = AnnotatedSymbol::class("HomeViewModel", "com.example")
//!     .with_supertype("androidx.lifecycle.ViewModel")
//!     .with_constructor(vec![Parameter::new("api", "com.example.`object`.Api")]);
//! let descriptor = gate.check(&symbol).unwrap();
//! assert_eq!(descriptor.parameters[0].type_name, "com.example.object.Api");
//!
//! let interface = symbol.clone().with_kind(SymbolKind::Interface);
//! assert!(gate.check(&interface).unwrap_err().is_not_a_class());
//! ```

use crate::kotlin;
use producible_core::{
    AnnotatedSymbol, ClassDescriptor, Error, GeneratorSettings, Parameter, Result,
};
use std::collections::HashSet;

/// Gate deciding which annotated symbols receive a factory.
#[derive(Debug, Clone)]
pub struct ValidationGate {
    base_type: String,
}

impl ValidationGate {
    /// Creates a gate requiring `base_type` as the declared supertype.
    #[must_use]
    pub fn new(base_type: impl Into<String>) -> Self {
        Self {
            base_type: base_type.into(),
        }
    }

    /// Creates a gate from generator settings.
    #[must_use]
    pub fn from_settings(settings: &GeneratorSettings) -> Self {
        Self::new(settings.base_type.clone())
    }

    /// Returns the required base type.
    #[must_use]
    pub fn base_type(&self) -> &str {
        &self.base_type
    }

    /// Checks a symbol and turns it into a class descriptor.
    ///
    /// A symbol without a primary constructor is accepted with an empty
    /// parameter list; reporting that case is up to the caller.
    ///
    /// # Errors
    ///
    /// - [`Error::NotAClass`] if the symbol is not a class
    /// - [`Error::WrongSupertype`] if the declared supertype differs from the
    ///   required base type
    /// - [`Error::InvalidDescriptor`] if the class shape cannot be emitted
    pub fn check(&self, symbol: &AnnotatedSymbol) -> Result<ClassDescriptor> {
        if !symbol.kind.is_class() {
            return Err(Error::NotAClass {
                symbol: symbol.name.clone(),
                kind: symbol.kind.to_string(),
            });
        }

        let supertype = symbol.supertype.as_deref();
        if supertype != Some(self.base_type.as_str()) {
            return Err(Error::WrongSupertype {
                symbol: symbol.name.clone(),
                required: self.base_type.clone(),
                found: symbol.supertype.clone(),
            });
        }

        let parameters = symbol
            .constructor
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(sanitize_parameter)
            .collect();

        let descriptor = ClassDescriptor::new(
            symbol.name.clone(),
            symbol.package.clone(),
            self.base_type.clone(),
            parameters,
        );
        validate_descriptor(&descriptor)?;

        Ok(descriptor)
    }
}

/// Strips identifier escaping from a parameter's name and type.
#[must_use]
pub fn sanitize_parameter(parameter: &Parameter) -> Parameter {
    Parameter::new(
        kotlin::strip_escaping(&parameter.name),
        kotlin::strip_escaping(&parameter.type_name),
    )
}

/// Checks that a descriptor can be emitted as compilable Kotlin.
///
/// Parameter names and types are checked after escaping is stripped.
///
/// # Errors
///
/// Returns [`Error::InvalidDescriptor`] naming the first violated rule.
///
/// # Examples
///
/// ```
/// use producible_codegen::validation::validate_descriptor;
/// use producible_core::{ClassDescriptor, Parameter};
///
/// let duplicate = ClassDescriptor::new(
///     "ProfileViewModel",
///     "com.example",
///     "androidx.lifecycle.ViewModel",
///     vec![Parameter::new("id", "kotlin.String"), Parameter::new("id", "kotlin.Int")],
/// );
/// assert!(validate_descriptor(&duplicate).unwrap_err().is_invalid_descriptor());
/// ```
pub fn validate_descriptor(descriptor: &ClassDescriptor) -> Result<()> {
    let invalid = |reason: String| Error::InvalidDescriptor {
        symbol: descriptor.class_name.clone(),
        reason,
    };

    let class_name = &descriptor.class_name;
    if !kotlin::is_identifier(class_name) || kotlin::is_hard_keyword(class_name) {
        return Err(invalid(format!("'{class_name}' is not a valid class name")));
    }

    if !descriptor.package_name.is_empty()
        && !kotlin::package_segments(&descriptor.package_name).all(kotlin::is_identifier)
    {
        return Err(invalid(format!(
            "'{}' is not a valid package name",
            descriptor.package_name
        )));
    }

    let mut seen = HashSet::with_capacity(descriptor.parameters.len());
    for parameter in &descriptor.parameters {
        let name = kotlin::strip_escaping(&parameter.name);
        if !kotlin::is_identifier(&name) {
            return Err(invalid(format!(
                "'{}' is not a valid parameter name",
                parameter.name
            )));
        }

        let type_name = kotlin::strip_escaping(&parameter.type_name);
        if !kotlin::is_type_reference(&type_name) {
            return Err(invalid(format!(
                "parameter '{name}' has invalid type '{}'",
                parameter.type_name
            )));
        }

        if !seen.insert(name.clone()) {
            return Err(invalid(format!("duplicate parameter '{name}'")));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use producible_core::SymbolKind;

    const BASE: &str = "androidx.lifecycle.ViewModel";

    fn view_model(name: &str) -> AnnotatedSymbol {
        AnnotatedSymbol::class(name, "com.example").with_supertype(BASE)
    }

    #[test]
    fn test_accepts_valid_class() {
        let gate = ValidationGate::new(BASE);
        let symbol = view_model("MainViewModel").with_constructor(vec![
            Parameter::new("name", "retrofit2.Retrofit"),
            Parameter::new("age", "java.util.Calendar"),
        ]);

        let descriptor = gate.check(&symbol).unwrap();
        assert_eq!(descriptor.class_name, "MainViewModel");
        assert_eq!(descriptor.package_name, "com.example");
        assert_eq!(descriptor.declared_supertype, BASE);
        assert_eq!(descriptor.parameters.len(), 2);
    }

    #[test]
    fn test_rejects_every_non_class_kind() {
        let gate = ValidationGate::new(BASE);
        for kind in [
            SymbolKind::Interface,
            SymbolKind::Enum,
            SymbolKind::Object,
            SymbolKind::AnnotationClass,
            SymbolKind::Function,
        ] {
            let symbol = view_model("Thing").with_kind(kind);
            let err = gate.check(&symbol).unwrap_err();
            assert!(err.is_not_a_class(), "{kind} should be rejected");
        }
    }

    #[test]
    fn test_kind_checked_before_supertype() {
        let gate = ValidationGate::new(BASE);
        let symbol = AnnotatedSymbol::class("Thing", "p").with_kind(SymbolKind::Function);
        assert!(gate.check(&symbol).unwrap_err().is_not_a_class());
    }

    #[test]
    fn test_rejects_wrong_supertype() {
        let gate = ValidationGate::new(BASE);
        let symbol = AnnotatedSymbol::class("Presenter", "p").with_supertype("com.example.Base");

        match gate.check(&symbol).unwrap_err() {
            Error::WrongSupertype {
                symbol,
                required,
                found,
            } => {
                assert_eq!(symbol, "Presenter");
                assert_eq!(required, BASE);
                assert_eq!(found.as_deref(), Some("com.example.Base"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_supertype_comparison_is_exact() {
        let gate = ValidationGate::new(BASE);
        let lowercase = AnnotatedSymbol::class("A", "p").with_supertype(BASE.to_lowercase());
        let missing = AnnotatedSymbol::class("A", "p");
        assert!(gate.check(&lowercase).unwrap_err().is_wrong_supertype());
        assert!(gate.check(&missing).unwrap_err().is_wrong_supertype());
    }

    #[test]
    fn test_missing_constructor_is_zero_parameters() {
        let gate = ValidationGate::new(BASE);
        let descriptor = gate.check(&view_model("EmptyViewModel")).unwrap();
        assert!(descriptor.parameters.is_empty());
    }

    #[test]
    fn test_strips_escaping_from_types_and_names() {
        let gate = ValidationGate::new(BASE);
        let symbol = view_model("A").with_constructor(vec![Parameter::new(
            "`in`",
            "com.`fun`.Input",
        )]);

        let descriptor = gate.check(&symbol).unwrap();
        assert_eq!(descriptor.parameters[0], Parameter::new("in", "com.fun.Input"));
    }

    #[test]
    fn test_rejects_invalid_names() {
        let gate = ValidationGate::new(BASE);

        let bad_class = view_model("Not Valid");
        assert!(gate.check(&bad_class).unwrap_err().is_invalid_descriptor());

        let keyword_class = view_model("class");
        assert!(gate.check(&keyword_class).unwrap_err().is_invalid_descriptor());

        let bad_package = AnnotatedSymbol::class("A", "com..example").with_supertype(BASE);
        assert!(gate.check(&bad_package).unwrap_err().is_invalid_descriptor());

        let bad_param =
            view_model("A").with_constructor(vec![Parameter::new("2fast", "kotlin.Int")]);
        assert!(gate.check(&bad_param).unwrap_err().is_invalid_descriptor());
    }

    #[test]
    fn test_rejects_empty_type() {
        let gate = ValidationGate::new(BASE);
        let symbol = view_model("A").with_constructor(vec![Parameter::new("x", "``")]);
        let err = gate.check(&symbol).unwrap_err();
        assert!(err.to_string().contains("invalid type"));
    }

    #[test]
    fn test_rejects_type_that_escapes_parameter_list() {
        let gate = ValidationGate::new(BASE);
        let symbol = view_model("A")
            .with_constructor(vec![Parameter::new("x", "kotlin.Int) : evil.Base(")]);
        let err = gate.check(&symbol).unwrap_err();
        assert!(err.is_invalid_descriptor());
        assert!(err.to_string().contains("invalid type"));

        let descriptor = ClassDescriptor::new(
            "A",
            "p",
            BASE,
            vec![Parameter::new("x", "kotlin.Int) : evil.Base(")],
        );
        assert!(validate_descriptor(&descriptor).is_err());
    }

    #[test]
    fn test_rejects_duplicate_parameters() {
        let gate = ValidationGate::new(BASE);
        let symbol = view_model("A").with_constructor(vec![
            Parameter::new("id", "kotlin.String"),
            Parameter::new("`id`", "kotlin.String"),
        ]);
        let err = gate.check(&symbol).unwrap_err();
        assert!(err.to_string().contains("duplicate parameter 'id'"));
    }

    #[test]
    fn test_default_package_allowed() {
        let gate = ValidationGate::new(BASE);
        let symbol = AnnotatedSymbol::class("RootViewModel", "").with_supertype(BASE);
        assert!(gate.check(&symbol).is_ok());
    }

    #[test]
    fn test_from_settings() {
        let settings = GeneratorSettings::builder().base_type("com.example.Base").build();
        let gate = ValidationGate::from_settings(&settings);
        assert_eq!(gate.base_type(), "com.example.Base");
    }
}
