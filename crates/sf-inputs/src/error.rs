//! Error types for input rendering.

use thiserror::Error;

/// Result type for input operations.
pub type Result<T> = std::result::Result<T, InputError>;

/// Plugin the missing-capability message points users at.
pub const COUNTRY_SELECT_PLUGIN_URL: &str = "https://github.com/stefanpenner/country_select";

/// Errors that can occur while rendering an input.
#[derive(Error, Debug)]
pub enum InputError {
    /// The form builder cannot render the helper this input delegates to.
    #[error(
        "To use the :{input} input, please install a {helper} plugin, like this one: {plugin_url}"
    )]
    MissingCapability {
        input: &'static str,
        helper: &'static str,
        plugin_url: &'static str,
    },

    /// Template rendering error.
    #[error("template error: {0}")]
    Template(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl InputError {
    /// Missing `country_select` helper on the builder.
    pub fn missing_country_select() -> Self {
        InputError::MissingCapability {
            input: "country",
            helper: "country_select",
            plugin_url: COUNTRY_SELECT_PLUGIN_URL,
        }
    }

    /// Whether this error is a builder capability problem.
    pub fn is_missing_capability(&self) -> bool {
        matches!(self, InputError::MissingCapability { .. })
    }
}

impl From<askama::Error> for InputError {
    fn from(err: askama::Error) -> Self {
        InputError::Template(err.to_string())
    }
}
