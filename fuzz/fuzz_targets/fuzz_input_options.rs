//! Fuzz target for country input rendering from JSON options.
//!
//! Options arrive from callers as already-parsed maps; whatever parses must
//! render without panicking under both priority-country conventions.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sf_inputs::{
    CountryInput, CountrySelect, CountrySelectCall, HtmlAttributes, InputOptions, Markup,
    PriorityCountriesConvention, SemanticFormBuilder,
};
use std::sync::Arc;

struct EchoCountrySelect;

impl CountrySelect for EchoCountrySelect {
    fn country_select(&self, call: &CountrySelectCall) -> Markup {
        Markup::text(&call.priority_countries().join(","))
    }
}

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(options) = InputOptions::from_json(text) else {
        return;
    };

    let builder =
        SemanticFormBuilder::new("user").with_country_select(Arc::new(EchoCountrySelect));
    for convention in [
        PriorityCountriesConvention::Positional,
        PriorityCountriesConvention::OptionsEntry,
    ] {
        let input = CountryInput::new("nationality", options.clone(), HtmlAttributes::new())
            .with_convention(convention);
        let _ = input.to_html(&builder);
    }
});
