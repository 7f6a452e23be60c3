//! Lenient readers over stored option values.
//!
//! Option values come from an external store and are not trusted to have the
//! declared shape: numbers may be strings, strings may be empty, objects may
//! be missing keys. These helpers treat every "empty" form (missing, `null`,
//! `""`, `false`, `0`) the same way so compilers can skip a field with a
//! single check.

use serde_json::{Map, Value};

/// Formats a number the way CSS expects it: integers without a fraction,
/// everything else in shortest form.
///
/// # Example
///
/// ```rust
/// use prisma_styles::format_number;
///
/// assert_eq!(format_number(24.0), "24");
/// assert_eq!(format_number(1.5), "1.5");
/// assert_eq!(format_number(-0.0), "0");
/// ```
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else if n.is_finite() {
        format!("{}", n)
    } else {
        "0".to_string()
    }
}

/// Returns `true` for the forms a stored value takes when "not set".
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.trim().is_empty() || s.trim() == "0",
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Reads a value as a number, accepting numeric strings such as `"24"` or `"1.5em"`'s leading number.
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => leading_number(s),
        Value::Bool(true) => Some(1.0),
        _ => None,
    }
}

/// Reads a value as text. Numbers are formatted; `null`, booleans and containers are not text.
pub fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => n.as_f64().map(format_number),
        _ => None,
    }
}

/// Truthiness used by feature toggles: `true`, non-zero numbers, and
/// strings other than `""`, `"0"` and `"false"`.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::String(s) => {
            let s = s.trim();
            !(s.is_empty() || s == "0" || s.eq_ignore_ascii_case("false"))
        }
        other => !is_empty(other),
    }
}

/// A non-empty text field of an object.
pub fn text_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object
        .get(key)
        .filter(|v| !is_empty(v))
        .and_then(as_text)
        .filter(|s| !s.is_empty())
}

/// A non-empty numeric field of an object.
pub fn number_field(object: &Map<String, Value>, key: &str) -> Option<f64> {
    object
        .get(key)
        .filter(|v| !is_empty(v))
        .and_then(as_number)
}

/// Reads a field that may be written either in kebab-case or camelCase.
pub fn field<'a>(object: &'a Map<String, Value>, kebab: &str) -> Option<&'a Value> {
    object.get(kebab).or_else(|| object.get(&camel_case(kebab)))
}

/// Like [`text_field`] but also accepts the camelCase spelling of `kebab`.
pub fn text_field_any(object: &Map<String, Value>, kebab: &str) -> Option<String> {
    if object.contains_key(kebab) {
        text_field(object, kebab)
    } else {
        text_field(object, &camel_case(kebab))
    }
}

/// Like [`number_field`] but also accepts the camelCase spelling of `kebab`.
pub fn number_field_any(object: &Map<String, Value>, kebab: &str) -> Option<f64> {
    if object.contains_key(kebab) {
        number_field(object, kebab)
    } else {
        number_field(object, &camel_case(kebab))
    }
}

fn camel_case(kebab: &str) -> String {
    let mut out = String::with_capacity(kebab.len());
    let mut upper = false;
    for c in kebab.chars() {
        if c == '-' {
            upper = true;
        } else if upper {
            out.push(c.to_ascii_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

fn leading_number(s: &str) -> Option<f64> {
    let s = s.trim();
    let end = s
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && (c == '-' || c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    s[..end].parse().ok()
}
