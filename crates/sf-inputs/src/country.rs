//! Country select input.
//!
//! Wraps whatever `country_select` helper the builder provides. The input
//! itself only resolves the priority countries, decides how to pass them,
//! and puts a label in front of the helper's output.
//!
//! Priority countries come from the input's `priority_countries` option,
//! falling back to `FormConfig::priority_countries`. Helpers may or may not
//! honour them.
//!
//! # Example
//!
//! ```
//! use sf_inputs::{
//!     CountryInput, CountrySelect, CountrySelectCall, HtmlAttributes, InputOptions, Markup,
//!     SemanticFormBuilder,
//! };
//! use std::sync::Arc;
//!
//! struct Plain;
//!
//! impl CountrySelect for Plain {
//!     fn country_select(&self, call: &CountrySelectCall) -> Markup {
//!         Markup::pre_escaped(format!(r#"<select name="user[{}]"></select>"#, call.method()))
//!     }
//! }
//!
//! let builder = SemanticFormBuilder::new("user").with_country_select(Arc::new(Plain));
//! let input = CountryInput::new("nationality", InputOptions::new(), HtmlAttributes::new());
//! let html = input.to_html(&builder).unwrap();
//! assert!(html.as_str().starts_with(r#"<li class="country input required""#));
//! ```

use crate::base;
use crate::builder::{CountrySelectCall, FormBuilder};
use crate::error::{InputError, Result};
use crate::markup::Markup;
use crate::options::{HtmlAttributes, InputOptions, SelectOptions};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// Where priority countries go when calling the helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityCountriesConvention {
    /// As their own argument, ahead of the options map. The older and more
    /// common helper signature.
    #[default]
    Positional,
    /// As a `priority_countries` entry inside the options map.
    OptionsEntry,
}

/// A `:country` input for one field.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryInput {
    method: String,
    options: InputOptions,
    html: HtmlAttributes,
    convention: PriorityCountriesConvention,
}

impl CountryInput {
    /// Input type name, used as the wrapper class.
    pub const INPUT_TYPE: &'static str = "country";

    pub fn new(method: impl Into<String>, options: InputOptions, html: HtmlAttributes) -> Self {
        Self {
            method: method.into(),
            options,
            html,
            convention: PriorityCountriesConvention::default(),
        }
    }

    /// Override how priority countries are handed to the helper.
    pub fn with_convention(mut self, convention: PriorityCountriesConvention) -> Self {
        self.convention = convention;
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn options(&self) -> &InputOptions {
        &self.options
    }

    pub fn convention(&self) -> PriorityCountriesConvention {
        self.convention
    }

    /// Render label + country select inside the standard wrapper.
    pub fn to_html(&self, builder: &dyn FormBuilder) -> Result<Markup> {
        let Some(helper) = builder.country_select() else {
            warn!(
                method = %self.method,
                object = %builder.object_name(),
                "country_select helper unavailable"
            );
            return Err(InputError::missing_country_select());
        };

        let call = self.country_select_call(builder);
        debug!(
            method = %self.method,
            convention = ?self.convention,
            priority_countries = call.priority_countries().len(),
            "Rendering country input"
        );

        let body = base::label_html(builder, &self.method, &self.options)
            + helper.country_select(&call);
        let html = base::input_wrapping(
            builder,
            Self::INPUT_TYPE,
            &self.method,
            &self.options,
            body,
        )?;

        debug!(bytes = html.len(), method = %self.method, "Country input rendered");
        Ok(html)
    }

    /// Arguments for the helper under the active convention.
    pub fn country_select_call(&self, builder: &dyn FormBuilder) -> CountrySelectCall {
        if self.priority_countries_as_argument() {
            CountrySelectCall::Positional {
                method: self.method.clone(),
                priority_countries: self.priority_countries(builder),
                options: self.input_options(),
                html: self.html.clone(),
            }
        } else {
            CountrySelectCall::OptionsEntry {
                method: self.method.clone(),
                options: self.input_options_with_priority_countries(builder),
                html: self.html.clone(),
            }
        }
    }

    /// The input's own list if set, else the builder default.
    pub fn priority_countries(&self, builder: &dyn FormBuilder) -> Vec<String> {
        match &self.options.priority_countries {
            Some(countries) => countries.clone(),
            None => builder.priority_countries().to_vec(),
        }
    }

    /// True unless the input was switched to `OptionsEntry`. Helper
    /// signatures cannot be detected, so this never looks at the helper.
    pub fn priority_countries_as_argument(&self) -> bool {
        self.convention == PriorityCountriesConvention::Positional
    }

    /// Options for the helper, without the keys this crate consumes.
    pub fn input_options(&self) -> SelectOptions {
        self.options.select.clone()
    }

    /// `input_options` plus a `priority_countries` entry.
    pub fn input_options_with_priority_countries(
        &self,
        builder: &dyn FormBuilder,
    ) -> SelectOptions {
        let mut options = self.input_options();
        let countries = self
            .priority_countries(builder)
            .into_iter()
            .map(Value::String)
            .collect();
        options.insert("priority_countries".to_string(), Value::Array(countries));
        options
    }
}
