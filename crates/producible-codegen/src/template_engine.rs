//! Template engine for code generation using Handlebars.
//!
//! Provides a wrapper around Handlebars with the built-in Kotlin factory
//! template pre-registered.
//!
//! # Examples
//!
//! ```
//! use producible_codegen::template_engine::TemplateEngine;
//!
//! let engine = TemplateEngine::new().unwrap();
//! assert!(engine.has_template(TemplateEngine::FACTORY_TEMPLATE));
//! ```

use handlebars::Handlebars;
use producible_core::{Error, Result};
use serde::Serialize;

/// Template engine for code generation.
///
/// Wraps Handlebars in strict mode with HTML escaping disabled, since the
/// output is Kotlin source rather than markup.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing it to be used across
/// thread boundaries safely.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Name of the built-in Kotlin factory template.
    pub const FACTORY_TEMPLATE: &'static str = "factory/kotlin";

    /// Creates a new template engine with registered templates.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails (should not happen
    /// with valid built-in templates).
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        Self::register_factory_templates(&mut handlebars)?;

        Ok(Self { handlebars })
    }

    fn register_factory_templates(handlebars: &mut Handlebars<'a>) -> Result<()> {
        handlebars
            .register_template_string(
                Self::FACTORY_TEMPLATE,
                include_str!("../templates/factory.kt.hbs"),
            )
            .map_err(|e| Error::TemplateError {
                message: format!("Failed to register factory template: {e}"),
                source: Some(Box::new(e)),
            })
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Template name is not registered
    /// - Context cannot be serialized
    /// - A variable referenced by the template is missing
    ///
    /// # Examples
    ///
    /// ```
    /// use producible_codegen::template_engine::TemplateEngine;
    /// use serde_json::json;
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut engine = TemplateEngine::new()?;
    /// engine.register_template_string("greeting", "// {{name}}")?;
    /// assert_eq!(engine.render("greeting", &json!({"name": "hi"}))?, "// hi");
    /// # Ok(())
    /// # }
    /// # example().unwrap();
    /// ```
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::TemplateError {
                message: format!("Template rendering failed: {e}"),
                source: Some(Box::new(e)),
            })
    }

    /// Registers a custom template, replacing any template with the same name.
    ///
    /// Registering under [`Self::FACTORY_TEMPLATE`] overrides the built-in
    /// Kotlin layout.
    ///
    /// # Errors
    ///
    /// Returns error if the template string is invalid.
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::TemplateError {
                message: format!("Failed to register template '{name}': {e}"),
                source: Some(Box::new(e)),
            })
    }

    /// Returns `true` if a template with this name is registered.
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn factory_context(parameters: serde_json::Value) -> serde_json::Value {
        json!({
            "marker": "Generated by Producible",
            "package_name": "com.example",
            "factory_name": "HomeViewModelFactory",
            "class_name": "HomeViewModel",
            "factory_interface": "androidx.lifecycle.ViewModelProvider.Factory",
            "base_type": "androidx.lifecycle.ViewModel",
            "parameters": parameters,
            "checked": false
        })
    }

    #[test]
    fn test_template_engine_creation() {
        let engine = TemplateEngine::new();
        assert!(engine.is_ok());
    }

    #[test]
    fn test_render_factory_template() {
        let engine = TemplateEngine::new().unwrap();
        let context = factory_context(json!([
            {"name": "repo", "type_name": "com.example.Repo"},
            {"name": "clock", "type_name": "java.time.Clock"}
        ]));

        let rendered = engine
            .render(TemplateEngine::FACTORY_TEMPLATE, &context)
            .unwrap();

        assert!(rendered.starts_with("// Generated by Producible"));
        assert!(rendered.contains("package com.example"));
        assert!(rendered.contains(
            "class HomeViewModelFactory(repo: com.example.Repo, clock: java.time.Clock)"
        ));
        assert!(rendered.contains("return HomeViewModel(repo, clock) as T"));
    }

    #[test]
    fn test_render_does_not_html_escape() {
        let engine = TemplateEngine::new().unwrap();
        let context = factory_context(json!([
            {"name": "items", "type_name": "kotlin.collections.List<kotlin.String>"}
        ]));

        let rendered = engine
            .render(TemplateEngine::FACTORY_TEMPLATE, &context)
            .unwrap();

        assert!(rendered.contains("items: kotlin.collections.List<kotlin.String>"));
        assert!(!rendered.contains("&lt;"));
    }

    #[test]
    fn test_strict_mode_missing_variable() {
        let engine = TemplateEngine::new().unwrap();
        let result = engine.render(TemplateEngine::FACTORY_TEMPLATE, &json!({"marker": "x"}));
        assert!(result.unwrap_err().is_template_error());
    }

    #[test]
    fn test_unknown_template() {
        let engine = TemplateEngine::new().unwrap();
        assert!(engine.render("nonexistent", &json!({})).is_err());
        assert!(!engine.has_template("nonexistent"));
    }

    #[test]
    fn test_register_invalid_template() {
        let mut engine = TemplateEngine::new().unwrap();
        assert!(engine.register_template_string("broken", "{{#if}}").is_err());
    }
}
