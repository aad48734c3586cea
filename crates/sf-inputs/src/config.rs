//! Form builder configuration types.

use crate::error::{InputError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// How inline validation errors are rendered after a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InlineErrors {
    /// All messages joined into one sentence.
    #[default]
    Sentence,
    /// One list item per message.
    List,
    /// Only the first message.
    First,
    /// Errors are not rendered inline.
    None,
}

/// Process-wide defaults shared by every input a builder renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Countries surfaced first in country selects when the input sets none.
    #[serde(default = "default_priority_countries")]
    pub priority_countries: Vec<String>,
    /// Treat inputs as required unless they say otherwise.
    #[serde(default = "default_true")]
    pub all_fields_required_by_default: bool,
    /// Pre-escaped markup appended to the label of required inputs.
    #[serde(default = "default_required_string")]
    pub required_string: String,
    /// Pre-escaped markup appended to the label of optional inputs.
    #[serde(default)]
    pub optional_string: String,
    /// Inline error rendering mode.
    #[serde(default)]
    pub inline_errors: InlineErrors,
    /// CSS class of the hint paragraph.
    #[serde(default = "default_hint_class")]
    pub default_hint_class: String,
    /// CSS class of the inline error paragraph.
    #[serde(default = "default_inline_error_class")]
    pub default_inline_error_class: String,
    /// CSS class of the inline error list.
    #[serde(default = "default_error_list_class")]
    pub default_error_list_class: String,
}

fn default_true() -> bool {
    true
}

fn default_priority_countries() -> Vec<String> {
    ["Australia", "Canada", "United Kingdom", "United States"]
        .iter()
        .map(|c| c.to_string())
        .collect()
}

fn default_required_string() -> String {
    r#"<abbr title="required">*</abbr>"#.to_string()
}

fn default_hint_class() -> String {
    "inline-hints".to_string()
}

fn default_inline_error_class() -> String {
    "inline-error".to_string()
}

fn default_error_list_class() -> String {
    "errors".to_string()
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            priority_countries: default_priority_countries(),
            all_fields_required_by_default: true,
            required_string: default_required_string(),
            optional_string: String::new(),
            inline_errors: InlineErrors::default(),
            default_hint_class: default_hint_class(),
            default_inline_error_class: default_inline_error_class(),
            default_error_list_class: default_error_list_class(),
        }
    }
}

impl FormConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default priority countries.
    pub fn with_priority_countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.priority_countries = countries.into_iter().map(Into::into).collect();
        self
    }

    /// Set whether inputs are required unless told otherwise.
    pub fn with_all_fields_required_by_default(mut self, required: bool) -> Self {
        self.all_fields_required_by_default = required;
        self
    }

    /// Set the inline error mode.
    pub fn with_inline_errors(mut self, mode: InlineErrors) -> Self {
        self.inline_errors = mode;
        self
    }

    /// Load configuration from JSON.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "Loading form config");
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check semantic constraints serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if let Some(idx) = self
            .priority_countries
            .iter()
            .position(|c| c.trim().is_empty())
        {
            return Err(InputError::InvalidConfig(format!(
                "priority_countries[{}] is blank",
                idx
            )));
        }

        let classes = [
            ("default_hint_class", &self.default_hint_class),
            ("default_inline_error_class", &self.default_inline_error_class),
            ("default_error_list_class", &self.default_error_list_class),
        ];
        for (name, value) in classes {
            if value.trim().is_empty() {
                return Err(InputError::InvalidConfig(format!("{} is empty", name)));
            }
        }

        Ok(())
    }
}
