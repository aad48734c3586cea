//! Form builder seam and the country-select capability it may expose.

use crate::config::FormConfig;
use crate::country::CountryInput;
use crate::error::Result;
use crate::markup::Markup;
use crate::options::{HtmlAttributes, InputOptions, SelectOptions};

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Arguments handed to a `country_select` helper.
///
/// Helpers disagree on where the priority countries go, so both shapes are
/// modelled and the input picks one per render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "convention", rename_all = "snake_case")]
pub enum CountrySelectCall {
    /// `country_select(method, priority_countries, options, html_options)`
    Positional {
        method: String,
        priority_countries: Vec<String>,
        options: SelectOptions,
        html: HtmlAttributes,
    },
    /// `country_select(method, options, html_options)` with
    /// `options["priority_countries"]` set.
    OptionsEntry {
        method: String,
        options: SelectOptions,
        html: HtmlAttributes,
    },
}

impl CountrySelectCall {
    /// Field the select is rendered for.
    pub fn method(&self) -> &str {
        match self {
            CountrySelectCall::Positional { method, .. } => method,
            CountrySelectCall::OptionsEntry { method, .. } => method,
        }
    }

    pub fn options(&self) -> &SelectOptions {
        match self {
            CountrySelectCall::Positional { options, .. } => options,
            CountrySelectCall::OptionsEntry { options, .. } => options,
        }
    }

    pub fn html(&self) -> &HtmlAttributes {
        match self {
            CountrySelectCall::Positional { html, .. } => html,
            CountrySelectCall::OptionsEntry { html, .. } => html,
        }
    }

    /// Priority countries regardless of which shape carries them.
    pub fn priority_countries(&self) -> Vec<String> {
        match self {
            CountrySelectCall::Positional {
                priority_countries, ..
            } => priority_countries.clone(),
            CountrySelectCall::OptionsEntry { options, .. } => options
                .get("priority_countries")
                .and_then(|v| v.as_array())
                .map(|arr| {
                    arr.iter()
                        .filter_map(|c| c.as_str().map(str::to_string))
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

/// A helper that renders the `<select>` of countries.
///
/// Implemented by whatever country plugin the application ships; this crate
/// only decides the arguments.
pub trait CountrySelect: Send + Sync {
    fn country_select(&self, call: &CountrySelectCall) -> Markup;
}

/// Context an input renders against.
pub trait FormBuilder {
    /// Name of the object the form edits, e.g. `user`.
    fn object_name(&self) -> &str;

    /// Process-wide defaults.
    fn config(&self) -> &FormConfig;

    /// Default priority countries for inputs that set none.
    fn priority_countries(&self) -> &[String] {
        &self.config().priority_countries
    }

    /// The country-select capability, if a plugin provides one.
    fn country_select(&self) -> Option<&dyn CountrySelect> {
        None
    }

    /// Validation messages attached to `method`.
    fn errors_on(&self, _method: &str) -> Vec<String> {
        Vec::new()
    }
}

/// Standard builder: an object name, a config, an optional country plugin
/// and per-field validation messages.
#[derive(Clone)]
pub struct SemanticFormBuilder {
    object_name: String,
    config: FormConfig,
    country_select: Option<Arc<dyn CountrySelect>>,
    errors: BTreeMap<String, Vec<String>>,
}

impl SemanticFormBuilder {
    /// Create a builder with default configuration and no plugins.
    pub fn new(object_name: impl Into<String>) -> Self {
        Self {
            object_name: object_name.into(),
            config: FormConfig::default(),
            country_select: None,
            errors: BTreeMap::new(),
        }
    }

    pub fn with_config(mut self, config: FormConfig) -> Self {
        self.config = config;
        self
    }

    /// Install a country-select plugin.
    pub fn with_country_select(mut self, helper: Arc<dyn CountrySelect>) -> Self {
        self.country_select = Some(helper);
        self
    }

    /// Attach validation messages to a field.
    pub fn with_errors<I, S>(mut self, method: impl Into<String>, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.errors
            .entry(method.into())
            .or_default()
            .extend(messages.into_iter().map(Into::into));
        self
    }

    /// Render a country input for `method`.
    pub fn country_input(
        &self,
        method: impl Into<String>,
        options: InputOptions,
        html: HtmlAttributes,
    ) -> Result<Markup> {
        CountryInput::new(method, options, html).to_html(self)
    }
}

impl FormBuilder for SemanticFormBuilder {
    fn object_name(&self) -> &str {
        &self.object_name
    }

    fn config(&self) -> &FormConfig {
        &self.config
    }

    fn country_select(&self) -> Option<&dyn CountrySelect> {
        self.country_select.as_deref()
    }

    fn errors_on(&self, method: &str) -> Vec<String> {
        self.errors.get(method).cloned().unwrap_or_default()
    }
}

impl fmt::Debug for SemanticFormBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SemanticFormBuilder")
            .field("object_name", &self.object_name)
            .field("config", &self.config)
            .field("has_country_select", &self.country_select.is_some())
            .field("errors", &self.errors)
            .finish()
    }
}
