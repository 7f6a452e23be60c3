use serde_json::{Map, Value};

use super::media::{wrap, Tier};
use super::Context;
use crate::value::{as_number, format_number, is_empty, text_field};

/// Compiles a range option into `selector{property: <n><unit>; }` blocks.
///
/// A flat value (a number, a numeric string, or `{value, unit}`) yields one
/// unwrapped block using the caller's `unit`; a missing `value` counts as 0.
///
/// A tiered value (`desktop`/`tablet`/`mobile` keys) yields one block per
/// non-empty tier, tablet and mobile wrapped in their media queries. Tier
/// blocks use the value's own `unit` when present, else `unit`. With
/// `responsive` false only the desktop tier is written.
///
/// ```rust
/// use prisma_styles::compile::{range, Context};
/// use serde_json::json;
///
/// let css = range(&Context::default(), "sel", "prop", &json!({"value": 24}), false, "px");
/// assert_eq!(css, "sel{prop: 24px; }");
/// ```
pub fn range(
    ctx: &Context<'_>,
    selector: &str,
    property: &str,
    value: &Value,
    responsive: bool,
    unit: &str,
) -> String {
    let block = |n: f64, unit: &str| format!("{selector}{{{property}: {}{unit}; }}", format_number(n));

    match value {
        Value::Number(_) | Value::String(_) => match as_number(value) {
            Some(n) => block(n, unit),
            None => String::new(),
        },
        Value::Object(object) if is_tiered(object) => {
            let own_unit = text_field(object, "unit");
            let mut css = String::new();
            for (key, tier_value) in object {
                let Some(tier) = Tier::from_key(key) else {
                    continue;
                };
                if !responsive && tier != Tier::Desktop {
                    continue;
                }
                let Some((n, tier_unit)) = tier_number(tier_value) else {
                    continue;
                };
                let unit = tier_unit.or_else(|| own_unit.clone()).unwrap_or_else(|| unit.to_string());
                css.push_str(&wrap(tier, &ctx.breakpoints, &block(n, unit.as_str())));
            }
            css
        }
        Value::Object(object) => {
            let n = object.get("value").and_then(as_number).unwrap_or(0.0);
            block(n, unit)
        }
        _ => String::new(),
    }
}

fn is_tiered(object: &Map<String, Value>) -> bool {
    object.keys().any(|k| Tier::from_key(k).is_some())
}

/// A non-empty tier value and the unit it carries, if any.
fn tier_number(value: &Value) -> Option<(f64, Option<String>)> {
    if is_empty(value) {
        return None;
    }
    match value {
        Value::Object(inner) => {
            let n = inner.get("value").filter(|v| !is_empty(v)).and_then(as_number)?;
            Some((n, text_field(inner, "unit")))
        }
        other => as_number(other).map(|n| (n, None)),
    }
}
