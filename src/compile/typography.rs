use serde_json::{Map, Value};

use super::media::{wrap, Tier};
use super::Context;
use crate::fonts::FontLoads;
use crate::value::{field, format_number, number_field_any, text_field_any};

const INHERIT: &str = "inherit";

/// Properties copied verbatim unless set to `inherit`.
const KEYWORD_PROPERTIES: [&str; 4] = ["font-weight", "font-style", "text-transform", "text-decoration"];

/// Compiles a typography option.
///
/// Emits a base block (keyword properties, family, letter spacing, desktop
/// size and line height), then a tablet and a mobile block holding only that
/// tier's size and line height. Blocks with nothing to say are omitted.
///
/// Hosted font families are recorded in `loads`.
///
/// ```rust
/// use prisma_styles::compile::{typography, Context};
/// use prisma_styles::fonts::FontLoads;
/// use serde_json::json;
///
/// let value = json!({
///     "font-family": "Georgia",
///     "font-weight": "700",
///     "font-style": "inherit",
///     "font-size-desktop": 2,
///     "font-size-unit": "rem",
/// });
/// let mut loads = FontLoads::new();
/// assert_eq!(
///     typography(&Context::default(), "h1", &value, &mut loads),
///     "h1{font-weight:700;font-family: Georgia, serif;font-size:2rem;}"
/// );
/// assert!(loads.is_empty());
/// ```
pub fn typography(ctx: &Context<'_>, selector: &str, value: &Value, loads: &mut FontLoads) -> String {
    let Some(object) = value.as_object().filter(|o| !o.is_empty()) else {
        return String::new();
    };

    let size_unit = text_field_any(object, "font-size-unit").unwrap_or_else(|| "px".to_string());
    let mut base = String::new();

    for property in KEYWORD_PROPERTIES {
        if let Some(keyword) = keyword(object, property) {
            base.push_str(&format!("{property}:{keyword};"));
        }
    }

    let family = keyword(object, "font-family");
    if let Some(family) = &family {
        base.push_str(&format!("font-family: {};", ctx.fonts.resolve(family)));
    }

    if let Some(spacing) = number_field_any(object, "letter-spacing") {
        let unit = text_field_any(object, "letter-spacing-unit").unwrap_or_else(|| "px".to_string());
        base.push_str(&format!("letter-spacing:{}{unit};", format_number(spacing)));
    }

    base.push_str(&tier_sizes(object, Tier::Desktop, &size_unit));

    let mut css = if base.is_empty() {
        String::new()
    } else {
        format!("{selector}{{{base}}}")
    };

    for tier in [Tier::Tablet, Tier::Mobile] {
        let body = tier_sizes(object, tier, &size_unit);
        if !body.is_empty() {
            css.push_str(&wrap(tier, &ctx.breakpoints, &format!("{selector}{{{body}}} ")));
        }
    }

    if let Some(family) = family.filter(|f| ctx.fonts.is_hosted(f)) {
        let weight = keyword(object, "font-weight");
        let style = keyword(object, "font-style");
        loads.request(&family, weight.as_deref(), style.as_deref(), &subsets(object));
    }

    css
}

/// A text field that is set and not `inherit`.
fn keyword(object: &Map<String, Value>, key: &str) -> Option<String> {
    text_field_any(object, key).filter(|v| !v.eq_ignore_ascii_case(INHERIT))
}

fn tier_sizes(object: &Map<String, Value>, tier: Tier, unit: &str) -> String {
    let mut body = String::new();
    if let Some(size) = number_field_any(object, &format!("font-size-{}", tier.key())) {
        body.push_str(&format!("font-size:{}{unit};", format_number(size)));
    }
    if let Some(height) = number_field_any(object, &format!("line-height-{}", tier.key())) {
        body.push_str(&format!("line-height:{};", format_number(height)));
    }
    body
}

fn subsets(object: &Map<String, Value>) -> Vec<String> {
    match field(object, "font-subsets") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        Some(Value::String(s)) if !s.is_empty() => vec![s.clone()],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ctx() -> Context<'static> {
        Context::default()
    }

    #[test]
    fn test_inherit_properties_skipped() {
        let value = json!({
            "font-family": "inherit",
            "font-weight": "inherit",
            "font-style": "italic",
            "text-transform": "uppercase",
            "text-decoration": "inherit",
            "line-height-desktop": 1.75
        });
        let mut loads = FontLoads::new();
        assert_eq!(
            typography(&ctx(), "body", &value, &mut loads),
            "body{font-style:italic;text-transform:uppercase;line-height:1.75;}"
        );
    }

    #[test]
    fn test_full_output_order() {
        let value = json!({
            "font-family": "default",
            "font-weight": "400",
            "font-style": "normal",
            "text-transform": "none",
            "text-decoration": "none",
            "letter-spacing": "0.5",
            "letter-spacing-unit": "em",
            "font-size-desktop": 1.6,
            "font-size-unit": "rem",
            "line-height-desktop": "1.75"
        });
        let mut loads = FontLoads::new();
        let css = typography(&ctx(), "body", &value, &mut loads);
        let stack = ctx().fonts.resolve("default");
        assert_eq!(
            css,
            format!(
                "body{{font-weight:400;font-style:normal;text-transform:none;text-decoration:none;\
                 font-family: {stack};letter-spacing:0.5em;font-size:1.6rem;line-height:1.75;}}"
            )
        );
    }

    #[test]
    fn test_tier_blocks_only_when_set() {
        let value = json!({
            "font-size-desktop": 40,
            "font-size-tablet": 32,
            "line-height-tablet": 1.2,
            "font-size-mobile": "",
            "line-height-mobile": ""
        });
        let mut loads = FontLoads::new();
        assert_eq!(
            typography(&ctx(), "h1", &value, &mut loads),
            "h1{font-size:40px;}\
             @media only screen and (max-width: 768px) {h1{font-size:32px;line-height:1.2;} }"
        );
    }

    #[test]
    fn test_tier_without_base() {
        let value = json!({"font-family": "inherit", "font-size-mobile": 14});
        let mut loads = FontLoads::new();
        assert_eq!(
            typography(&ctx(), "p", &value, &mut loads),
            "@media only screen and (max-width: 480px) {p{font-size:14px;} }"
        );
    }

    #[test]
    fn test_camel_case_fields() {
        let value = json!({"fontWeight": "600", "fontSizeDesktop": 18, "fontSizeUnit": "px"});
        let mut loads = FontLoads::new();
        assert_eq!(
            typography(&ctx(), "a", &value, &mut loads),
            "a{font-weight:600;font-size:18px;}"
        );
    }

    #[test]
    fn test_hosted_font_requested_once_per_family() {
        let value = json!({
            "font-family": "Open Sans",
            "font-weight": "600",
            "font-subsets": ["latin-ext"]
        });
        let mut loads = FontLoads::new();
        let css = typography(&ctx(), "h2", &value, &mut loads);
        typography(&ctx(), "h3", &value, &mut loads);
        typography(&ctx(), "h4", &json!({"font-family": "Open Sans"}), &mut loads);

        assert_eq!(css, "h2{font-weight:600;font-family: \"Open Sans\";}");
        assert_eq!(loads.len(), 1);
        let request = loads.iter().next().unwrap();
        assert!(request.weights.contains("600"));
        assert!(request.subsets.contains("latin-ext"));
    }

    #[test]
    fn test_standard_font_not_requested() {
        let mut loads = FontLoads::new();
        typography(&ctx(), "a", &json!({"font-family": "Verdana"}), &mut loads);
        assert!(loads.is_empty());
    }

    #[test]
    fn test_non_object_is_empty() {
        let mut loads = FontLoads::new();
        assert_eq!(typography(&ctx(), "a", &json!("Open Sans"), &mut loads), "");
        assert_eq!(typography(&ctx(), "a", &json!({}), &mut loads), "");
        assert!(loads.is_empty());
    }
}
