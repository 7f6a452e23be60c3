//! Option declarations.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::value::{as_text, is_truthy};

/// The declared type of a themeable option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OptionKind {
    /// A number with a unit, flat or per responsive tier.
    Range,
    /// Four sides (`top`, `right`, `bottom`, `left`) per tier, plus a shared unit.
    Spacing,
    /// Font family, weight, style, decoration and per-tier size/line height.
    Typography,
    /// Colour, gradient or image background.
    Background,
    /// Border colour, style and per-side widths.
    Border,
    /// Text, link, link-hover (and widget-title) colours.
    ColorGroup,
    /// A single colour.
    Color,
    /// One of a fixed set of string choices.
    Select,
    /// An on/off feature switch.
    Toggle,
    /// A plain number.
    Number,
    /// Free text, e.g. user custom CSS.
    Text,
}

impl OptionKind {
    /// Returns a human-readable name for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            OptionKind::Range => "range",
            OptionKind::Spacing => "spacing",
            OptionKind::Typography => "typography",
            OptionKind::Background => "background",
            OptionKind::Border => "border",
            OptionKind::ColorGroup => "color-group",
            OptionKind::Color => "color",
            OptionKind::Select => "select",
            OptionKind::Toggle => "toggle",
            OptionKind::Number => "number",
            OptionKind::Text => "text",
        }
    }

    /// Whether values of this kind are objects rather than scalars.
    pub fn is_structured(self) -> bool {
        matches!(
            self,
            OptionKind::Spacing
                | OptionKind::Typography
                | OptionKind::Background
                | OptionKind::Border
                | OptionKind::ColorGroup
        )
    }
}

impl std::fmt::Display for OptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparison used by a [`Requirement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
}

/// A condition on another option that must hold for an option to be active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    /// Key of the option being tested.
    pub key: String,
    #[serde(default = "default_operator")]
    pub operator: Operator,
    /// Expected value. Booleans compare by truthiness, everything else as text.
    pub value: Value,
}

fn default_operator() -> Operator {
    Operator::Eq
}

impl Requirement {
    pub fn new(key: impl Into<String>, operator: Operator, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            operator,
            value: value.into(),
        }
    }

    /// Evaluates the requirement against the current value of its key.
    pub fn is_met(&self, actual: &Value) -> bool {
        let equal = match &self.value {
            Value::Bool(expected) => is_truthy(actual) == *expected,
            expected => match (as_text(expected), as_text(actual)) {
                (Some(e), Some(a)) => e == a,
                _ => expected == actual,
            },
        };
        match self.operator {
            Operator::Eq => equal,
            Operator::Ne => !equal,
        }
    }
}

/// Declaration of one themeable option.
///
/// Declared once when the schema is built and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionSpec {
    pub key: String,
    pub kind: OptionKind,
    #[serde(default)]
    pub default: Value,
    /// Units the control offers, first one is the default.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub units: Vec<String>,
    /// Whether the value carries `desktop`/`tablet`/`mobile` tiers.
    #[serde(default)]
    pub responsive: bool,
    /// All must hold for the option to be active.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<Requirement>,
}

impl OptionSpec {
    /// Creates a declaration with the given kind and default value.
    pub fn new(key: impl Into<String>, kind: OptionKind, default: Value) -> Self {
        Self {
            key: key.into(),
            kind,
            default,
            units: Vec::new(),
            responsive: false,
            requires: Vec::new(),
        }
    }

    pub fn color(key: &str, default: &str) -> Self {
        Self::new(key, OptionKind::Color, json!(default))
    }

    pub fn toggle(key: &str, default: bool) -> Self {
        Self::new(key, OptionKind::Toggle, json!(default))
    }

    pub fn select(key: &str, default: &str) -> Self {
        Self::new(key, OptionKind::Select, json!(default))
    }

    pub fn number(key: &str, default: i64) -> Self {
        Self::new(key, OptionKind::Number, json!(default))
    }

    pub fn text(key: &str) -> Self {
        Self::new(key, OptionKind::Text, json!(""))
    }

    /// A range option. Tiered when `default` contains tier keys.
    pub fn range(key: &str, default: Value, units: &[&str]) -> Self {
        let responsive = default
            .as_object()
            .is_some_and(|o| o.contains_key("desktop"));
        Self {
            units: units.iter().map(|u| u.to_string()).collect(),
            responsive,
            ..Self::new(key, OptionKind::Range, default)
        }
    }

    pub fn spacing(key: &str, default: Value) -> Self {
        Self {
            units: vec!["px".into(), "em".into(), "rem".into()],
            responsive: true,
            ..Self::new(key, OptionKind::Spacing, default)
        }
    }

    pub fn typography(key: &str, default: Value) -> Self {
        let mut merged = typography_base();
        if let (Some(base), Value::Object(overrides)) = (merged.as_object_mut(), default) {
            base.extend(overrides);
        }
        Self {
            responsive: true,
            ..Self::new(key, OptionKind::Typography, merged)
        }
    }

    pub fn background(key: &str, default: Value) -> Self {
        Self::new(key, OptionKind::Background, default)
    }

    pub fn border(key: &str, default: Value) -> Self {
        Self::new(key, OptionKind::Border, default)
    }

    pub fn color_group(key: &str, default: Value) -> Self {
        Self::new(key, OptionKind::ColorGroup, default)
    }

    /// Adds a requirement, returning the updated declaration for chaining.
    pub fn requires(mut self, key: &str, operator: Operator, value: impl Into<Value>) -> Self {
        self.requires.push(Requirement::new(key, operator, value));
        self
    }
}

/// Every typography field set to its "not configured" value.
fn typography_base() -> Value {
    json!({
        "font-family": "inherit",
        "font-subsets": [],
        "font-weight": "inherit",
        "font-style": "inherit",
        "text-transform": "inherit",
        "text-decoration": "inherit",
        "letter-spacing": "",
        "letter-spacing-unit": "px",
        "font-size-desktop": "",
        "font-size-tablet": "",
        "font-size-mobile": "",
        "font-size-unit": "px",
        "line-height-desktop": "",
        "line-height-tablet": "",
        "line-height-mobile": "",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirement_bool_uses_truthiness() {
        let req = Requirement::new("breadcrumbs_enable", Operator::Eq, true);
        assert!(req.is_met(&json!(true)));
        assert!(req.is_met(&json!("1")));
        assert!(!req.is_met(&json!(false)));
        assert!(!req.is_met(&Value::Null));
    }

    #[test]
    fn test_requirement_text_comparison() {
        let req = Requirement::new("pre_footer_cta_style", Operator::Eq, "1");
        assert!(req.is_met(&json!(1)));
        assert!(req.is_met(&json!("1")));
        assert!(!req.is_met(&json!("2")));

        let ne = Requirement::new("header_layout", Operator::Ne, "layout-3");
        assert!(ne.is_met(&json!("layout-1")));
        assert!(!ne.is_met(&json!("layout-3")));
    }

    #[test]
    fn test_range_detects_tiers() {
        let tiered = OptionSpec::range("logo_max_height", json!({"desktop": 30}), &["px"]);
        assert!(tiered.responsive);
        let flat = OptionSpec::range("main_nav_font_size", json!({"value": 15}), &["px"]);
        assert!(!flat.responsive);
    }

    #[test]
    fn test_typography_default_merges_over_base() {
        let spec = OptionSpec::typography("body_font", json!({"font-family": "default"}));
        let default = spec.default.as_object().unwrap();
        assert_eq!(default["font-family"], json!("default"));
        assert_eq!(default["font-weight"], json!("inherit"));
        assert_eq!(default["font-size-unit"], json!("px"));
    }

    #[test]
    fn test_requirement_deserializes_operator() {
        let req: Requirement =
            serde_yaml::from_str("key: breadcrumbs_position\noperator: '!='\nvalue: below-header\n")
                .unwrap();
        assert_eq!(req.operator, Operator::Ne);

        let default_op: Requirement = serde_yaml::from_str("key: a\nvalue: true\n").unwrap();
        assert_eq!(default_op.operator, Operator::Eq);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(OptionKind::ColorGroup.to_string(), "color-group");
        assert!(OptionKind::Border.is_structured());
        assert!(!OptionKind::Toggle.is_structured());
    }
}
