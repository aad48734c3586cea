//! Markup shared by every input type: ids, labels, hints, inline errors and
//! the wrapping `<li>`.

use crate::builder::FormBuilder;
use crate::config::InlineErrors;
use crate::error::Result;
use crate::markup::{content_tag, Markup};
use crate::options::{HtmlAttributes, InputOptions};

use askama::Template;

#[derive(Template)]
#[template(
    source = r#"<li class="{{ class }}" id="{{ id }}">{{ body|safe }}{{ errors|safe }}{{ hint|safe }}</li>"#,
    ext = "html"
)]
struct WrapperTemplate<'a> {
    class: &'a str,
    id: &'a str,
    body: &'a Markup,
    errors: &'a Markup,
    hint: &'a Markup,
}

/// DOM id for a field, e.g. `user` + `nationality` -> `user_nationality`.
pub fn dom_id(object_name: &str, method: &str) -> String {
    let method = method.strip_suffix('?').unwrap_or(method);
    let object = sanitize_object_name(object_name);
    if object.is_empty() {
        method.to_string()
    } else {
        format!("{}_{}", object, method)
    }
}

fn sanitize_object_name(object_name: &str) -> String {
    let joined = object_name.replace("][", "_");
    let mut out: String = joined
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | ':' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if out.ends_with('_') {
        out.pop();
    }
    out
}

/// Turn a field name into label text: `home_country_id` -> `Home country`.
pub fn humanize(method: &str) -> String {
    let base = method.strip_suffix("_id").unwrap_or(method);
    let spaced = base.replace('_', " ").to_lowercase();
    let trimmed = spaced.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Whether the input is required, per option or config default.
pub fn is_required(builder: &dyn FormBuilder, options: &InputOptions) -> bool {
    options
        .required
        .unwrap_or(builder.config().all_fields_required_by_default)
}

/// `<label>` for the field, with the required/optional marker appended.
pub fn label_html(builder: &dyn FormBuilder, method: &str, options: &InputOptions) -> Markup {
    let config = builder.config();
    let text = options.label.clone().unwrap_or_else(|| humanize(method));
    let marker = if is_required(builder, options) {
        &config.required_string
    } else {
        &config.optional_string
    };

    let mut attrs = HtmlAttributes::new();
    attrs.insert("class".to_string(), "label".to_string());
    attrs.insert("for".to_string(), dom_id(builder.object_name(), method));

    let inner = Markup::text(&text) + Markup::pre_escaped(marker.as_str());
    content_tag("label", &attrs, &inner)
}

/// Hint paragraph, or nothing when no hint is set.
pub fn hint_html(builder: &dyn FormBuilder, options: &InputOptions) -> Markup {
    match options.hint.as_deref() {
        Some(hint) if !hint.trim().is_empty() => {
            let mut attrs = HtmlAttributes::new();
            attrs.insert(
                "class".to_string(),
                builder.config().default_hint_class.clone(),
            );
            content_tag("p", &attrs, &Markup::text(hint))
        }
        _ => Markup::empty(),
    }
}

/// Inline errors for the field in the configured style.
pub fn error_html(builder: &dyn FormBuilder, method: &str) -> Markup {
    let errors = builder.errors_on(method);
    if errors.is_empty() {
        return Markup::empty();
    }

    let config = builder.config();
    let mut attrs = HtmlAttributes::new();
    match config.inline_errors {
        InlineErrors::Sentence => {
            attrs.insert("class".to_string(), config.default_inline_error_class.clone());
            content_tag("p", &attrs, &Markup::text(&to_sentence(&errors)))
        }
        InlineErrors::First => {
            attrs.insert("class".to_string(), config.default_inline_error_class.clone());
            content_tag("p", &attrs, &Markup::text(&errors[0]))
        }
        InlineErrors::List => {
            attrs.insert("class".to_string(), config.default_error_list_class.clone());
            let items = errors.iter().fold(Markup::empty(), |acc, message| {
                acc + content_tag("li", &HtmlAttributes::new(), &Markup::text(message))
            });
            content_tag("ul", &attrs, &items)
        }
        InlineErrors::None => Markup::empty(),
    }
}

/// Join messages as `a`, `a and b`, `a, b, and c`.
pub fn to_sentence(words: &[String]) -> String {
    match words {
        [] => String::new(),
        [one] => one.clone(),
        [first, second] => format!("{} and {}", first, second),
        [rest @ .., last] => format!("{}, and {}", rest.join(", "), last),
    }
}

/// Classes on the wrapper: custom classes, input type, `input`, `error`
/// when errors exist, then `required` or `optional`.
pub fn wrapper_classes(
    builder: &dyn FormBuilder,
    input_type: &str,
    method: &str,
    options: &InputOptions,
) -> String {
    let mut classes: Vec<&str> = options
        .wrapper_class
        .as_deref()
        .map(|c| c.split_whitespace().collect())
        .unwrap_or_default();
    classes.push(input_type);
    classes.push("input");
    if !builder.errors_on(method).is_empty() {
        classes.push("error");
    }
    classes.push(if is_required(builder, options) {
        "required"
    } else {
        "optional"
    });
    classes.join(" ")
}

/// Wrap an input body (label + control) in the standard `<li>` container,
/// followed by inline errors and the hint.
pub fn input_wrapping(
    builder: &dyn FormBuilder,
    input_type: &str,
    method: &str,
    options: &InputOptions,
    body: Markup,
) -> Result<Markup> {
    let class = wrapper_classes(builder, input_type, method, options);
    let id = format!("{}_input", dom_id(builder.object_name(), method));
    let errors = error_html(builder, method);
    let hint = hint_html(builder, options);

    let template = WrapperTemplate {
        class: &class,
        id: &id,
        body: &body,
        errors: &errors,
        hint: &hint,
    };
    Ok(Markup::pre_escaped(template.render()?))
}
