//! Config file loading tests against real files on disk.

use serde_json::json;
use sf_inputs::{
    CountrySelect, CountrySelectCall, FormConfig, HtmlAttributes, InlineErrors, InputError,
    InputOptions, Markup, SemanticFormBuilder,
};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

struct Fixed;

impl CountrySelect for Fixed {
    fn country_select(&self, call: &CountrySelectCall) -> Markup {
        Markup::text(&call.priority_countries().join("|"))
    }
}

fn write_config(dir: &TempDir, value: serde_json::Value) -> std::path::PathBuf {
    let path = dir.path().join("forms.json");
    fs::write(&path, serde_json::to_string_pretty(&value).unwrap()).unwrap();
    path
}

#[test]
fn test_load_applies_priority_countries() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        json!({
            "priority_countries": ["Australia", "New Zealand"],
            "inline_errors": "list"
        }),
    );

    let config = FormConfig::load(&path).unwrap();
    assert_eq!(config.inline_errors, InlineErrors::List);
    assert!(config.all_fields_required_by_default);

    let builder = SemanticFormBuilder::new("user")
        .with_config(config)
        .with_country_select(Arc::new(Fixed));
    let html = builder
        .country_input("nationality", InputOptions::new(), HtmlAttributes::new())
        .unwrap();
    assert!(html.as_str().contains("</label>Australia|New Zealand</li>"));
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = FormConfig::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, InputError::Io(_)));
}

#[test]
fn test_load_malformed_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("forms.json");
    fs::write(&path, "{ priority_countries: ").unwrap();
    let err = FormConfig::load(&path).unwrap_err();
    assert!(matches!(err, InputError::Json(_)));
}

#[test]
fn test_load_rejects_blank_country() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, json!({ "priority_countries": ["Canada", ""] }));
    let err = FormConfig::load(&path).unwrap_err();
    assert!(matches!(err, InputError::InvalidConfig(_)));
}

#[test]
fn test_load_wrong_type() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, json!({ "priority_countries": "Canada" }));
    assert!(matches!(
        FormConfig::load(&path).unwrap_err(),
        InputError::Json(_)
    ));
}
