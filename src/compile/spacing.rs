use serde_json::{Map, Value};

use super::media::{wrap, Tier};
use super::Context;
use crate::value::{as_number, format_number, is_empty, text_field};

/// Compiles a spacing option (`margin`, `padding`, `border` widths).
///
/// Responsive values hold one `{top, right, bottom, left}` object per tier
/// plus a shared `unit`. Each tier with at least one non-empty side becomes
/// one block, wrapped in the tier's media query. Empty sides are skipped.
///
/// With `responsive` false, the sides (flat, or the desktop tier of a tiered
/// value) are all written into one unwrapped block, empty sides as `0`.
///
/// For the `border` property every side gets a `-width` suffix
/// (`border-top-width`).
///
/// ```rust
/// use prisma_styles::compile::{spacing, Context};
/// use serde_json::json;
///
/// let value = json!({"top": 10, "right": 20, "bottom": 10, "left": 20, "unit": "px"});
/// assert_eq!(
///     spacing(&Context::default(), ".logo", "margin", &value, false),
///     ".logo{margin-top: 10px;margin-right: 20px;margin-bottom: 10px;margin-left: 20px;}"
/// );
/// ```
pub fn spacing(
    ctx: &Context<'_>,
    selector: &str,
    property: &str,
    value: &Value,
    responsive: bool,
) -> String {
    let Some(object) = value.as_object() else {
        return String::new();
    };
    let unit = text_field(object, "unit").unwrap_or_else(|| "px".to_string());

    if !responsive {
        let sides = match object.get("desktop").and_then(Value::as_object) {
            Some(desktop) => desktop,
            None => object,
        };
        let body: String = sides
            .iter()
            .filter(|(side, _)| side.as_str() != "unit" && Tier::from_key(side).is_none())
            .map(|(side, v)| declaration(property, side, v, &unit))
            .collect();
        if body.is_empty() {
            return String::new();
        }
        return format!("{selector}{{{body}}}");
    }

    let mut css = String::new();
    for (key, sides) in object {
        let (Some(tier), Some(sides)) = (Tier::from_key(key), sides.as_object()) else {
            continue;
        };
        let body = tier_body(property, sides, &unit);
        if body.is_empty() {
            continue;
        }
        css.push_str(&wrap(tier, &ctx.breakpoints, &format!("{selector}{{{body}}}")));
    }
    css
}

fn tier_body(property: &str, sides: &Map<String, Value>, unit: &str) -> String {
    sides
        .iter()
        .filter(|(_, v)| !is_empty(v))
        .map(|(side, v)| declaration(property, side, v, unit))
        .collect()
}

fn declaration(property: &str, side: &str, value: &Value, unit: &str) -> String {
    let suffix = if property == "border" { "-width" } else { "" };
    let n = as_number(value).map(f64::trunc).unwrap_or(0.0);
    format!("{property}-{side}{suffix}: {}{unit};", format_number(n))
}
