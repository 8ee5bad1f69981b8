//! Integration tests for the producible CLI library.
//!
//! Runs manifest loading, generation and writing against a temporary
//! directory, the way a build script would drive the tool.

use producible_cli::commands::{check, generate};
use producible_cli::exit_code_for;
use producible_cli::manifest::Manifest;
use producible_core::cli::ExitCode;
use producible_core::{CreateStrategy, SymbolKind};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const DEMO_MANIFEST: &str = r#"
[settings]
marker = "Generated by Producible"

[[symbols]]
name = "MainActivityViewModel"
package = "com.sxhardha.producibledemo"
supertype = "androidx.lifecycle.ViewModel"

[[symbols.constructor]]
name = "name"
type = "retrofit2.Retrofit"

[[symbols.constructor]]
name = "age"
type = "java.util.Calendar"
"#;

fn write_manifest(dir: &Path, file_name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_demo_manifest_generates_factory() {
    let temp = TempDir::new().unwrap();
    let manifest = write_manifest(temp.path(), "producible.toml", DEMO_MANIFEST);
    let out = temp.path().join("generated");

    let summary = generate::generate(&manifest, &out, false).unwrap();
    assert_eq!(summary.exit_code(), ExitCode::SUCCESS);
    assert!(summary.diagnostics.is_empty());

    let source = fs::read_to_string(
        out.join("com/sxhardha/producibledemo/MainActivityViewModelFactory.kt"),
    )
    .unwrap();
    assert!(source.starts_with("// Generated by Producible"));
    assert!(source.contains("package com.sxhardha.producibledemo"));
    assert!(source.contains(
        "class MainActivityViewModelFactory(name: retrofit2.Retrofit, age: java.util.Calendar)"
    ));
    assert!(source.contains("MainActivityViewModel(name, age)"));
}

#[test]
fn test_regeneration_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    let manifest = write_manifest(temp.path(), "producible.toml", DEMO_MANIFEST);
    let out = temp.path().join("generated");
    let file = out.join("com/sxhardha/producibledemo/MainActivityViewModelFactory.kt");

    generate::generate(&manifest, &out, false).unwrap();
    let first = fs::read(&file).unwrap();
    generate::generate(&manifest, &out, false).unwrap();
    let second = fs::read(&file).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_json_manifest_with_checked_strategy() {
    let temp = TempDir::new().unwrap();
    let manifest = write_manifest(
        temp.path(),
        "producible.json",
        r#"{
            "settings": {"create_strategy": "checked"},
            "symbols": [
                {
                    "name": "SearchViewModel",
                    "package": "com.example.search",
                    "supertype": "androidx.lifecycle.ViewModel",
                    "constructor": [{"name": "in", "type": "com.example.`in`.Input"}]
                }
            ]
        }"#,
    );

    let loaded = Manifest::load(&manifest).unwrap();
    assert_eq!(loaded.settings.create_strategy, CreateStrategy::Checked);

    let out = temp.path().join("generated");
    generate::generate(&manifest, &out, false).unwrap();
    let source =
        fs::read_to_string(out.join("com/example/search/SearchViewModelFactory.kt")).unwrap();

    assert!(source.contains("`in`: com.example.in.Input"));
    assert!(source.contains("modelClass.cast("));
    assert!(!source.contains("UNCHECKED_CAST"));
}

#[test]
fn test_partial_failure_keeps_valid_files() {
    let temp = TempDir::new().unwrap();
    let manifest = write_manifest(
        temp.path(),
        "producible.toml",
        r#"
        [[symbols]]
        name = "Navigator"
        package = "com.example"
        kind = "interface"

        [[symbols]]
        name = "ProfileViewModel"
        package = "com.example"
        supertype = "androidx.lifecycle.ViewModel"
        constructor = []

        [[symbols]]
        name = "LegacyPresenter"
        package = "com.example"
        supertype = "com.example.Presenter"
        constructor = []
        "#,
    );
    let out = temp.path().join("generated");

    let summary = generate::generate(&manifest, &out, false).unwrap();

    assert_eq!(summary.files.len(), 1);
    assert!(out.join("com/example/ProfileViewModelFactory.kt").exists());
    assert!(!out.join("com/example/NavigatorFactory.kt").exists());
    assert_eq!(summary.errors, 2);
    assert_eq!(summary.exit_code(), ExitCode::DIAGNOSTICS);

    let checked = check::check(&manifest).unwrap();
    assert_eq!(checked.valid, 1);
    assert_eq!(checked.errors, 2);
}

#[test]
fn test_manifest_symbol_kinds() {
    let manifest = Manifest::from_toml_str(
        r#"
        [[symbols]]
        name = "Screen"
        kind = "enum"

        [[symbols]]
        name = "Router"
        kind = "object"

        [[symbols]]
        name = "Produce"
        kind = "annotation_class"
        "#,
    )
    .unwrap();

    let kinds: Vec<_> = manifest.symbols.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![SymbolKind::Enum, SymbolKind::Object, SymbolKind::AnnotationClass]
    );
}

#[test]
fn test_invalid_settings_exit_code() {
    let temp = TempDir::new().unwrap();
    let manifest = write_manifest(
        temp.path(),
        "producible.toml",
        "[settings]\ncreate_strategy = \"reflective\"\n",
    );

    let err = generate::generate(&manifest, temp.path(), true).unwrap_err();
    assert_eq!(exit_code_for(&err), ExitCode::INVALID_INPUT);
}

#[test]
fn test_duplicate_class_written_once() {
    let temp = TempDir::new().unwrap();
    let manifest = write_manifest(
        temp.path(),
        "producible.toml",
        r#"
        [[symbols]]
        name = "HomeViewModel"
        package = "com.example"
        supertype = "androidx.lifecycle.ViewModel"
        constructor = [{ name = "first", type = "kotlin.Int" }]

        [[symbols]]
        name = "HomeViewModel"
        package = "com.example"
        supertype = "androidx.lifecycle.ViewModel"
        constructor = [{ name = "second", type = "kotlin.String" }]
        "#,
    );
    let out = temp.path().join("generated");

    let summary = generate::generate(&manifest, &out, false).unwrap();

    assert_eq!(summary.files.len(), 1);
    assert_eq!(summary.errors, 1);
    assert!(
        summary.diagnostics[0]
            .message
            .contains("duplicate symbol 'com.example.HomeViewModel'")
    );

    let source = fs::read_to_string(out.join("com/example/HomeViewModelFactory.kt")).unwrap();
    assert!(source.contains("first: kotlin.Int"));
}
