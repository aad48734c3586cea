//! Country input markup invariant tests.
//!
//! These tests validate the rendered fragment structure:
//! - exactly one label, immediately followed by the helper's select
//! - wrapper id and classes follow the object/field names
//! - inline errors and hints come after the select, in that order
//! - user-supplied text is escaped, helper markup is not touched

use regex::Regex;
use sf_inputs::{
    CountrySelect, CountrySelectCall, FormConfig, HtmlAttributes, InlineErrors, InputOptions,
    Markup, SemanticFormBuilder,
};
use std::sync::Arc;

const SELECT: &str = r#"<select id="user_nationality" name="user[nationality]"><option value="AU">Australia</option></select>"#;

/// Helper that always returns the same select.
struct FixedCountrySelect;

impl CountrySelect for FixedCountrySelect {
    fn country_select(&self, _call: &CountrySelectCall) -> Markup {
        Markup::pre_escaped(SELECT)
    }
}

fn test_builder() -> SemanticFormBuilder {
    SemanticFormBuilder::new("user").with_country_select(Arc::new(FixedCountrySelect))
}

fn render(builder: &SemanticFormBuilder, options: InputOptions) -> String {
    builder
        .country_input("nationality", options, HtmlAttributes::new())
        .unwrap()
        .into_string()
}

// ============================================================================
// Label + select composition
// ============================================================================

mod composition {
    use super::*;

    #[test]
    fn test_exactly_one_label() {
        let html = render(&test_builder(), InputOptions::new());
        assert_eq!(html.matches("<label").count(), 1, "one opening label tag");
        assert_eq!(html.matches("</label>").count(), 1, "one closing label tag");
    }

    #[test]
    fn test_label_immediately_followed_by_select() {
        let html = render(&test_builder(), InputOptions::new());
        let expected = format!("</label>{}", SELECT);
        assert!(
            html.contains(&expected),
            "select must follow the label with nothing in between: {}",
            html
        );
    }

    #[test]
    fn test_label_is_first_child_of_wrapper() {
        let html = render(&test_builder(), InputOptions::new());
        let re = Regex::new(r#"^<li [^>]*><label [^>]*>[^<]*(<abbr[^>]*>\*</abbr>)?</label><select"#)
            .unwrap();
        assert!(re.is_match(&html), "unexpected structure: {}", html);
    }

    #[test]
    fn test_full_fragment() {
        let html = render(&test_builder(), InputOptions::new());
        assert_eq!(
            html,
            format!(
                r#"<li class="country input required" id="user_nationality_input"><label class="label" for="user_nationality">Nationality<abbr title="required">*</abbr></label>{}</li>"#,
                SELECT
            )
        );
    }

    #[test]
    fn test_helper_markup_not_escaped() {
        let html = render(&test_builder(), InputOptions::new());
        assert!(html.contains(r#"<option value="AU">Australia</option>"#));
        assert!(!html.contains("&lt;select"));
    }
}

// ============================================================================
// Wrapper
// ============================================================================

mod wrapper {
    use super::*;

    #[test]
    fn test_wrapper_id_uses_nested_object_name() {
        let builder = SemanticFormBuilder::new("user[address]")
            .with_country_select(Arc::new(FixedCountrySelect));
        let html = builder
            .country_input("country", InputOptions::new(), HtmlAttributes::new())
            .unwrap();
        assert!(html.as_str().contains(r#"id="user_address_country_input""#));
        assert!(html.as_str().contains(r#"for="user_address_country""#));
    }

    #[test]
    fn test_optional_when_not_required_by_default() {
        let builder = SemanticFormBuilder::new("user")
            .with_config(FormConfig::new().with_all_fields_required_by_default(false))
            .with_country_select(Arc::new(FixedCountrySelect));
        let html = render(&builder, InputOptions::new());
        assert!(html.starts_with(r#"<li class="country input optional""#));
        assert!(!html.contains("<abbr"));
    }

    #[test]
    fn test_required_option_beats_config() {
        let builder = SemanticFormBuilder::new("user")
            .with_config(FormConfig::new().with_all_fields_required_by_default(false))
            .with_country_select(Arc::new(FixedCountrySelect));
        let html = render(&builder, InputOptions::new().with_required(true));
        assert!(html.starts_with(r#"<li class="country input required""#));
        assert!(html.contains(r#"<abbr title="required">*</abbr></label>"#));
    }

    #[test]
    fn test_custom_wrapper_class_comes_first() {
        let html = render(&test_builder(), InputOptions::new().with_wrapper_class("span6"));
        assert!(html.starts_with(r#"<li class="span6 country input required""#));
    }
}

// ============================================================================
// Hints and inline errors
// ============================================================================

mod hints_and_errors {
    use super::*;

    #[test]
    fn test_errors_then_hint_after_select() {
        let builder = test_builder().with_errors("nationality", ["can't be blank"]);
        let html = render(&builder, InputOptions::new().with_hint("As on your passport"));

        let select_at = html.find("</select>").unwrap();
        let error_at = html.find(r#"<p class="inline-error">"#).unwrap();
        let hint_at = html.find(r#"<p class="inline-hints">"#).unwrap();
        assert!(select_at < error_at && error_at < hint_at, "{}", html);
        assert!(html.contains(r#"class="country input error required""#));
    }

    #[test]
    fn test_error_list_mode() {
        let builder = SemanticFormBuilder::new("user")
            .with_config(FormConfig::new().with_inline_errors(InlineErrors::List))
            .with_country_select(Arc::new(FixedCountrySelect))
            .with_errors("nationality", ["is invalid", "is reserved"]);
        let html = render(&builder, InputOptions::new());
        assert!(html.contains(r#"<ul class="errors"><li>is invalid</li><li>is reserved</li></ul></li>"#));
    }

    #[test]
    fn test_errors_on_other_fields_ignored() {
        let builder = test_builder().with_errors("email", ["is taken"]);
        let html = render(&builder, InputOptions::new());
        assert!(!html.contains("error"));
    }
}

// ============================================================================
// Escaping
// ============================================================================

mod escaping {
    use super::*;

    #[test]
    fn test_label_text_escaped() {
        let html = render(
            &test_builder(),
            InputOptions::new().with_label(r#"<script>alert("x")</script>"#),
        );
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"));
    }

    #[test]
    fn test_hint_and_errors_escaped() {
        let builder = test_builder().with_errors("nationality", ["<b>bad</b>"]);
        let html = render(&builder, InputOptions::new().with_hint("a & b"));
        assert!(html.contains("&lt;b&gt;bad&lt;/b&gt;"));
        assert!(html.contains("a &amp; b"));
    }
}
