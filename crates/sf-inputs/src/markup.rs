//! Pre-escaped HTML fragments and escaping helpers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A fragment of HTML that is already escaped and safe to embed verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Markup(String);

impl Markup {
    /// Wrap a string that is known to be safe HTML.
    pub fn pre_escaped(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Escape plain text into a fragment.
    pub fn text(text: &str) -> Self {
        Self(html_escape(text))
    }

    /// An empty fragment.
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Append another fragment.
    pub fn push(&mut self, other: &Markup) {
        self.0.push_str(&other.0);
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::ops::Add<Markup> for Markup {
    type Output = Markup;

    fn add(mut self, rhs: Markup) -> Markup {
        self.0.push_str(&rhs.0);
        self
    }
}

/// Escape HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Render attributes as ` key="value"` pairs in key order.
pub fn attributes(attrs: &BTreeMap<String, String>) -> String {
    let mut out = String::new();
    for (key, value) in attrs {
        out.push_str(&format!(r#" {}="{}""#, html_escape(key), html_escape(value)));
    }
    out
}

/// Build `<name attrs>inner</name>`.
pub fn content_tag(name: &str, attrs: &BTreeMap<String, String>, inner: &Markup) -> Markup {
    Markup(format!(
        "<{name}{attrs}>{inner}</{name}>",
        name = name,
        attrs = attributes(attrs),
        inner = inner,
    ))
}
