//! Kotlin factory generator.
//!
//! Maps a validated [`ClassDescriptor`] to a [`GeneratedFileDescriptor`]
//! holding a `<ClassName>Factory` that implements the factory interface.
//! Generation is a pure function of the descriptor and the settings:
//! repeated calls yield byte-identical text.
//!
//! For `MainActivityViewModel(name: Retrofit, age: Calendar)` the generated
//! source reads:
//!
//! ```text
//! // Generated by Producible
//! package com.sxhardha.producibledemo
//!
//! class MainActivityViewModelFactory(name: retrofit2.Retrofit, age: java.util.Calendar) : androidx.lifecycle.ViewModelProvider.Factory {
//!     val name: retrofit2.Retrofit = name
//!     val age: java.util.Calendar = age
//!
//!     @Suppress("UNCHECKED_CAST")
//!     override fun <T : androidx.lifecycle.ViewModel> create(modelClass: java.lang.Class<T>): T {
//!         return MainActivityViewModel(name, age) as T
//!     }
//! }
//! ```
//!
//! # Examples
//!
//! ```
//! use producible_codegen::FactoryGenerator;
//! use producible_core::{ClassDescriptor, GeneratorSettings, Parameter};
//!
//! let generator = FactoryGenerator::new(GeneratorSettings::default()).unwrap();
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
//! let file = generator.generate(&descriptor).unwrap();
//! assert_eq!(file.file_name, "MainActivityViewModelFactory");
//! assert!(file.source_text.contains("MainActivityViewModel(name, age)"));
//! ```

use crate::kotlin;
use crate::template_engine::TemplateEngine;
use crate::types::{FactoryContext, GeneratedFileDescriptor, ParameterContext};
use crate::validation::validate_descriptor;
use producible_core::{ClassDescriptor, CreateStrategy, GeneratorSettings, Result};

/// Generator for Kotlin factory types.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing safe use across threads.
#[derive(Debug)]
pub struct FactoryGenerator<'a> {
    engine: TemplateEngine<'a>,
    settings: GeneratorSettings,
}

impl<'a> FactoryGenerator<'a> {
    /// Creates a generator using the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns error if the settings are invalid or template registration
    /// fails.
    pub fn new(settings: GeneratorSettings) -> Result<Self> {
        Self::with_engine(TemplateEngine::new()?, settings)
    }

    /// Creates a generator around a prepared template engine.
    ///
    /// Use this to render with an overridden
    /// [`TemplateEngine::FACTORY_TEMPLATE`].
    ///
    /// # Errors
    ///
    /// Returns error if the settings are invalid.
    pub fn with_engine(engine: TemplateEngine<'a>, settings: GeneratorSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { engine, settings })
    }

    /// Returns the settings used for generation.
    #[must_use]
    pub const fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Generates the factory file for a class.
    ///
    /// The descriptor is validated first, since callers may build it by hand.
    /// Descriptors coming out of [`crate::ValidationGate::check`] are already
    /// valid; the batch processor renders those without the second pass.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The descriptor cannot be emitted as Kotlin
    ///   ([`producible_core::Error::InvalidDescriptor`])
    /// - Template rendering fails
    pub fn generate(&self, descriptor: &ClassDescriptor) -> Result<GeneratedFileDescriptor> {
        validate_descriptor(descriptor)?;
        self.render(descriptor)
    }

    /// Renders a descriptor that already passed [`validate_descriptor`].
    pub(crate) fn render(&self, descriptor: &ClassDescriptor) -> Result<GeneratedFileDescriptor> {
        let context = self.create_context(descriptor);
        let source_text = self
            .engine
            .render(TemplateEngine::FACTORY_TEMPLATE, &context)?;

        tracing::debug!(
            "Rendered {} with {} parameters",
            context.factory_name,
            descriptor.parameter_count()
        );

        Ok(GeneratedFileDescriptor {
            file_name: context.factory_name,
            package_name: descriptor.package_name.clone(),
            source_text,
        })
    }

    fn create_context(&self, descriptor: &ClassDescriptor) -> FactoryContext {
        let parameters = descriptor
            .parameters
            .iter()
            .map(|parameter| ParameterContext {
                name: kotlin::escape_identifier(&kotlin::strip_escaping(&parameter.name)),
                type_name: kotlin::strip_escaping(&parameter.type_name),
            })
            .collect();

        FactoryContext {
            marker: self.settings.marker.clone(),
            package_name: kotlin::escape_package(&descriptor.package_name),
            factory_name: descriptor.factory_name(),
            class_name: descriptor.class_name.clone(),
            factory_interface: self.settings.factory_interface.clone(),
            base_type: self.settings.base_type.clone(),
            parameters,
            checked: self.settings.create_strategy == CreateStrategy::Checked,
        }
    }
}
