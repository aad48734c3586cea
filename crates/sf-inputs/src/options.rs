//! Per-input option maps.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Options forwarded untouched to the underlying select helper.
pub type SelectOptions = BTreeMap<String, Value>;

/// HTML attributes for the generated control.
pub type HtmlAttributes = BTreeMap<String, String>;

/// Options a caller sets on a single input.
///
/// Keys this crate understands are typed fields; every other key is kept in
/// `select` and passed to the helper as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputOptions {
    /// Label text. Defaults to the humanized field name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Hint rendered below the control.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// Overrides `FormConfig::all_fields_required_by_default`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Overrides `FormConfig::priority_countries` for this input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_countries: Option<Vec<String>>,
    /// Extra CSS classes for the wrapper element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrapper_class: Option<String>,
    /// Pass-through options for the helper.
    #[serde(flatten)]
    pub select: SelectOptions,
}

impl InputOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn with_priority_countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.priority_countries = Some(countries.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_wrapper_class(mut self, class: impl Into<String>) -> Self {
        self.wrapper_class = Some(class.into());
        self
    }

    /// Add a pass-through option for the helper.
    pub fn with_select_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.select.insert(key.into(), value.into());
        self
    }

    /// Parse options from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
