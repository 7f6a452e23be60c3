//! MiniJinja filter registration for CSS block templates.

use minijinja::{Environment, Value};

use crate::color::{hex2rgba, is_light_color, light_or_dark, luminance};
use crate::value::as_number;

/// Registers the colour filters and functions on a minijinja environment.
///
/// | Name | Kind | Example |
/// |---|---|---|
/// | `luminance` | filter | `{{ accent_color \| luminance(0.15) }}` |
/// | `rgba` | filter | `{{ content_text_color \| rgba(0.73) }}` |
/// | `light_or_dark` | filter | `{{ c \| light_or_dark("#000", "#fff") }}` |
/// | `number` | filter | `{{ primary_button_border_width \| number }}px` |
/// | `is_light` | function | `{% if is_light(background_color) %}` |
///
/// `number` reads the leading number of strings such as `"2px"` and yields
/// 0 for anything unusable, truncating like the field compilers do.
pub(crate) fn register_filters(env: &mut Environment<'static>) {
    env.add_filter("number", |value: Value| -> i64 {
        let value = serde_json::to_value(&value).unwrap_or_default();
        as_number(&value).map_or(0, |n| n.trunc() as i64)
    });

    env.add_filter("luminance", |value: Value, percent: f64| -> String {
        luminance(&value.to_string(), percent)
    });

    env.add_filter("rgba", |value: Value, opacity: f64| -> String {
        hex2rgba(&value.to_string(), opacity)
    });

    env.add_filter(
        "light_or_dark",
        |value: Value, dark: String, light: String| -> String {
            light_or_dark(&value.to_string(), &dark, &light).to_string()
        },
    );

    env.add_function("is_light", |value: Value| -> bool {
        is_light_color(&value.to_string())
    });
}
