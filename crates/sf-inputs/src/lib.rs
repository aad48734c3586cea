//! Semantic form inputs.
//!
//! Renders form fields as a label plus control inside a standard `<li>`
//! wrapper, with hints and inline errors. Controls that need data this crate
//! does not own are delegated to helpers the form builder exposes.
//!
//! # Inputs
//!
//! - Country: a `<select>` of countries rendered by a pluggable
//!   `country_select` helper, with configurable priority countries
//!
//! # Example
//!
//! ```no_run
//! use sf_inputs::{FormConfig, HtmlAttributes, InputOptions, SemanticFormBuilder};
//! use std::path::Path;
//!
//! let config = FormConfig::load(Path::new("forms.json")).unwrap();
//! let builder = SemanticFormBuilder::new("user").with_config(config);
//! // Fails with MissingCapability until a country_select helper is installed.
//! let html = builder.country_input("nationality", InputOptions::new(), HtmlAttributes::new());
//! ```

pub mod base;
pub mod builder;
pub mod config;
pub mod country;
pub mod error;
pub mod markup;
pub mod options;

pub use builder::{CountrySelect, CountrySelectCall, FormBuilder, SemanticFormBuilder};
pub use config::{FormConfig, InlineErrors};
pub use country::{CountryInput, PriorityCountriesConvention};
pub use error::{InputError, Result};
pub use markup::Markup;
pub use options::{HtmlAttributes, InputOptions, SelectOptions};
