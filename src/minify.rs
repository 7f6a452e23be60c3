//! CSS minification for the persisted stylesheet.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

// `/*!` comments are kept.
static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*[^!].*?\*/").expect("valid regex"));

static SPACE_AFTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(,|:|;|\{|}) ").expect("valid regex"));

static SPACE_BEFORE: Lazy<Regex> = Lazy::new(|| Regex::new(r" (,|;|\{|})").expect("valid regex"));

static LEADING_ZERO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(:| )0\.([0-9]+)(%|em|ex|px|in|cm|mm|pt|pc)").expect("valid regex")
});

static ZERO_UNIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(:| )(\.?)0(%|em|ex|px|in|cm|mm|pt|pc)").expect("valid regex")
});

/// Minifies a stylesheet.
///
/// Strips comments, collapses whitespace, removes spaces around
/// punctuation, turns `0.5px` into `.5px` and unit-bearing zeros into `0`.
/// Values are never rewritten otherwise; colours keep their case.
///
/// ```rust
/// use prisma_styles::minify;
///
/// let css = "a {\n  margin: 0px 0.5em;\n  /* note */\n  color: #FFF;\n}";
/// assert_eq!(minify(css), "a{margin:0 .5em;color:#FFF;}");
/// ```
pub fn minify(css: &str) -> String {
    let css = COMMENT.replace_all(css, "");
    let css = WHITESPACE.replace_all(&css, " ");
    let css = SPACE_AFTER.replace_all(&css, "$1");
    let css = SPACE_BEFORE.replace_all(&css, "$1");
    let css = LEADING_ZERO.replace_all(&css, "${1}.${2}${3}");
    let css = ZERO_UNIT.replace_all(&css, "${1}0");
    css.trim().to_string()
}
