use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Context;
use crate::value::{format_number, number_field_any, text_field_any};

/// Border styles accepted by the border compiler. Anything else is dropped.
pub const BORDER_STYLES: [&str; 9] = [
    "none", "solid", "dashed", "dotted", "double", "groove", "ridge", "inset", "outset",
];

const SIDES: [&str; 4] = ["top", "right", "bottom", "left"];

/// Which part of a design-options value to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DesignKind {
    /// Colour, gradient or image background.
    Background,
    /// Text, link and link-hover colours.
    Color,
    /// Border colour, style and per-side widths.
    Border,
    /// `::after` background of widget separators, read from a border value.
    #[serde(alias = "separator-color")]
    SeparatorColor,
}

/// Compiles a design-options value (`background`, `color-group` or `border`)
/// for the requested `kind`.
///
/// Non-object values compile to an empty fragment. A colour group always
/// writes its three declarations, `inherit` standing in for unset colours.
pub fn design(ctx: &Context<'_>, selector: &str, value: &Value, kind: DesignKind) -> String {
    let Some(object) = value.as_object() else {
        return String::new();
    };
    match kind {
        DesignKind::Color => color(selector, object),
        _ if object.is_empty() => String::new(),
        DesignKind::Background => background(ctx, selector, object),
        DesignKind::Border => border(selector, object),
        DesignKind::SeparatorColor => match text_field_any(object, "separator-color") {
            Some(c) => format!("{selector}::after {{ background-color:{c}; }}"),
            None => String::new(),
        },
    }
}

fn background(ctx: &Context<'_>, selector: &str, object: &Map<String, Value>) -> String {
    let kind = text_field_any(object, "background-type").unwrap_or_else(|| "color".to_string());
    let body = match kind.as_str() {
        "color" => text_field_any(object, "background-color")
            .map(|c| format!("background: {c};"))
            .unwrap_or_default(),
        "gradient" => gradient(ctx, object),
        "image" => image(object),
        _ => String::new(),
    };

    let mut css = if body.is_empty() {
        String::new()
    } else {
        format!("{selector}{{{body}}}")
    };

    if kind == "image" && text_field_any(object, "background-image").is_some() {
        if let Some(overlay) = text_field_any(object, "background-color-overlay") {
            css.push_str(&format!("{selector}::after {{ background-color: {overlay}; }}"));
        }
    }
    css
}

fn gradient(ctx: &Context<'_>, object: &Map<String, Value>) -> String {
    let (Some(from), Some(to)) = (
        text_field_any(object, "gradient-color-1"),
        text_field_any(object, "gradient-color-2"),
    ) else {
        return String::new();
    };
    let from_at = number_field_any(object, "gradient-color-1-location").unwrap_or(0.0);
    let to_at = number_field_any(object, "gradient-color-2-location").unwrap_or(100.0);
    let stops = format!(
        "{from} {}%, {to} {}%",
        format_number(from_at),
        format_number(to_at)
    );

    let mut body = format!("background: {from};");
    let gradient_type = text_field_any(object, "gradient-type").unwrap_or_else(|| "linear".to_string());
    match gradient_type.as_str() {
        "linear" => {
            let angle = number_field_any(object, "gradient-linear-angle").unwrap_or(0.0);
            let args = format!("{}deg, {stops}", format_number(angle));
            if ctx.legacy_gradient_prefixes {
                body.push_str(&format!("background: -webkit-linear-gradient({args});"));
                body.push_str(&format!("background: -o-linear-gradient({args});"));
            }
            body.push_str(&format!("background: linear-gradient({args});"));
        }
        "radial" => {
            let position = text_field_any(object, "gradient-position")
                .unwrap_or_else(|| "center center".to_string());
            if ctx.legacy_gradient_prefixes {
                body.push_str(&format!("background: -webkit-radial-gradient({position}, circle, {stops});"));
                body.push_str(&format!("background: -o-radial-gradient({position}, circle, {stops});"));
            }
            body.push_str(&format!("background: radial-gradient(circle at {position}, {stops});"));
        }
        _ => {}
    }
    body
}

fn image(object: &Map<String, Value>) -> String {
    let Some(url) = text_field_any(object, "background-image") else {
        return String::new();
    };
    let text = |key: &str, fallback: &str| text_field_any(object, key).unwrap_or_else(|| fallback.to_string());
    let percent = |key: &str| {
        let n = number_field_any(object, key).map(f64::trunc).unwrap_or(0.0);
        format_number(n)
    };

    format!(
        "background-image: url({url});background-size: {};background-attachment: {};\
         background-position: {}% {}%;background-repeat: {};",
        text("background-size", "auto"),
        text("background-attachment", "scroll"),
        percent("background-position-x"),
        percent("background-position-y"),
        text("background-repeat", "no-repeat"),
    )
}

fn color(selector: &str, object: &Map<String, Value>) -> String {
    let value = |key: &str| text_field_any(object, key).unwrap_or_else(|| "inherit".to_string());

    format!(
        "{selector} {{ color: {}; }}{selector} a {{ color: {}; }}{selector} a:hover {{ color: {} !important; }}",
        value("text-color"),
        value("link-color"),
        value("link-hover-color"),
    )
}

fn border(selector: &str, object: &Map<String, Value>) -> String {
    let mut body = String::new();

    if let Some(c) = text_field_any(object, "border-color") {
        body.push_str(&format!("border-color:{c};"));
    }

    if let Some(style) = text_field_any(object, "border-style") {
        if BORDER_STYLES.contains(&style.as_str()) {
            body.push_str(&format!("border-style: {style};"));
        }
    }

    for side in SIDES {
        if let Some(width) = number_field_any(object, &format!("border-{side}-width")) {
            body.push_str(&format!("border-{side}-width: {}px;", format_number(width.trunc())));
        }
    }

    if body.is_empty() {
        String::new()
    } else {
        format!("{selector}{{{body}}}")
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
    fn test_background_color() {
        let value = json!({"background-type": "color", "background-color": "#112233"});
        assert_eq!(
            design(&ctx(), "#colophon", &value, DesignKind::Background),
            "#colophon{background: #112233;}"
        );
    }

    #[test]
    fn test_background_color_empty_is_nothing() {
        let value = json!({"background-type": "color", "background-color": ""});
        assert_eq!(design(&ctx(), "a", &value, DesignKind::Background), "");
    }

    #[test]
    fn test_background_camel_case_type() {
        let value = json!({"backgroundType": "color", "backgroundColor": "#fff"});
        assert_eq!(design(&ctx(), "a", &value, DesignKind::Background), "a{background: #fff;}");
    }

    #[test]
    fn test_linear_gradient_with_legacy_prefixes() {
        let value = json!({
            "background-type": "gradient",
            "gradient-type": "linear",
            "gradient-linear-angle": 45,
            "gradient-color-1": "#000",
            "gradient-color-1-location": 10,
            "gradient-color-2": "#fff",
            "gradient-color-2-location": 90
        });
        assert_eq!(
            design(&ctx(), "a", &value, DesignKind::Background),
            "a{background: #000;\
             background: -webkit-linear-gradient(45deg, #000 10%, #fff 90%);\
             background: -o-linear-gradient(45deg, #000 10%, #fff 90%);\
             background: linear-gradient(45deg, #000 10%, #fff 90%);}"
        );
    }

    #[test]
    fn test_radial_gradient_without_legacy_prefixes() {
        let modern = Context {
            legacy_gradient_prefixes: false,
            ..ctx()
        };
        let value = json!({
            "background-type": "gradient",
            "gradient-type": "radial",
            "gradient-position": "top left",
            "gradient-color-1": "red",
            "gradient-color-1-location": 0,
            "gradient-color-2": "blue",
            "gradient-color-2-location": 100
        });
        assert_eq!(
            design(&modern, "a", &value, DesignKind::Background),
            "a{background: red;background: radial-gradient(circle at top left, red 0%, blue 100%);}"
        );
    }

    #[test]
    fn test_gradient_missing_stop_is_nothing() {
        let value = json!({"background-type": "gradient", "gradient-color-1": "red"});
        assert_eq!(design(&ctx(), "a", &value, DesignKind::Background), "");
    }

    #[test]
    fn test_image_with_overlay() {
        let value = json!({
            "background-type": "image",
            "background-image": "https://example.com/bg.jpg",
            "background-size": "cover",
            "background-attachment": "fixed",
            "background-position-x": 50,
            "background-position-y": "25",
            "background-repeat": "no-repeat",
            "background-color-overlay": "rgba(0,0,0,0.5)"
        });
        assert_eq!(
            design(&ctx(), ".hero", &value, DesignKind::Background),
            ".hero{background-image: url(https://example.com/bg.jpg);background-size: cover;\
             background-attachment: fixed;background-position: 50% 25%;background-repeat: no-repeat;}\
             .hero::after { background-color: rgba(0,0,0,0.5); }"
        );
    }

    #[test]
    fn test_image_without_overlay_has_no_after_rule() {
        let value = json!({
            "background-type": "image",
            "background-image": "https://example.com/bg.jpg"
        });
        let css = design(&ctx(), ".hero", &value, DesignKind::Background);
        assert!(css.starts_with(".hero{background-image: url(https://example.com/bg.jpg);"));
        assert!(!css.contains("::after"));
    }

    #[test]
    fn test_overlay_without_image_has_no_after_rule() {
        let value = json!({"background-type": "image", "background-color-overlay": "#000"});
        assert_eq!(design(&ctx(), "a", &value, DesignKind::Background), "");
    }

    #[test]
    fn test_color_group() {
        let value = json!({"text-color": "#111", "link-color": "", "link-hover-color": "#333"});
        assert_eq!(
            design(&ctx(), ".b", &value, DesignKind::Color),
            ".b { color: #111; }.b a { color: inherit; }.b a:hover { color: #333 !important; }"
        );
    }

    #[test]
    fn test_color_group_unset_keys_inherit() {
        let value = json!({"text-color": "#111"});
        assert_eq!(
            design(&ctx(), ".b", &value, DesignKind::Color),
            ".b { color: #111; }.b a { color: inherit; }.b a:hover { color: inherit !important; }"
        );
        assert_eq!(
            design(&ctx(), ".b", &json!({}), DesignKind::Color),
            ".b { color: inherit; }.b a { color: inherit; }.b a:hover { color: inherit !important; }"
        );
    }

    #[test]
    fn test_border_drops_unknown_style() {
        let value = json!({
            "border-color": "#eee",
            "border-style": "wavy",
            "border-top-width": 1,
            "border-bottom-width": "2",
            "border-left-width": 0
        });
        assert_eq!(
            design(&ctx(), "#m", &value, DesignKind::Border),
            "#m{border-color:#eee;border-top-width: 1px;border-bottom-width: 2px;}"
        );
    }

    #[test]
    fn test_border_allowed_style() {
        let value = json!({"border-style": "dashed"});
        assert_eq!(design(&ctx(), "x", &value, DesignKind::Border), "x{border-style: dashed;}");
    }

    #[test]
    fn test_separator_color() {
        let value = json!({"separator-color": "#ccc", "border-color": "#eee"});
        assert_eq!(
            design(&ctx(), ".w", &value, DesignKind::SeparatorColor),
            ".w::after { background-color:#ccc; }"
        );
        assert_eq!(design(&ctx(), ".w", &json!({"border-color": "#eee"}), DesignKind::SeparatorColor), "");
    }

    #[test]
    fn test_non_object_is_empty() {
        for kind in [DesignKind::Background, DesignKind::Color, DesignKind::Border, DesignKind::SeparatorColor] {
            assert_eq!(design(&ctx(), "a", &json!("red"), kind), "");
            assert_eq!(design(&ctx(), "a", &Value::Null, kind), "");
        }
    }

    #[test]
    fn test_kind_deserializes() {
        let kind: DesignKind = serde_json::from_str("\"separator_color\"").unwrap();
        assert_eq!(kind, DesignKind::SeparatorColor);
    }
}
