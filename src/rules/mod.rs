//! The rule table: which compilers run for which selectors, grouped into
//! gated areas.
//!
//! A [`RuleSet`] is plain data. The built-in table ([`RuleSet::builtin`])
//! describes every themeable area of the site; custom tables can be loaded
//! from YAML or JSON. The same table drives the full stylesheet build and the
//! incremental live preview, so both always agree.
//!
//! Every [`Area`] has a [`Condition`] (its governing toggles). When the
//! condition does not hold, none of the area's rules run. Each [`Rule`] has an
//! *owner*, the id of the style element it is written to during live
//! preview, and a set of keys it *reads*. Changing any read key re-renders
//! the owner.
//!
//! ```rust
//! use prisma_styles::rules::RuleSet;
//!
//! let rules = RuleSet::builtin();
//! assert!(rules.areas().iter().any(|a| a.name == "top_bar"));
//! ```

mod builtin;
mod editor;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::compile::DesignKind;
use crate::error::StyleError;
use crate::schema::{Operator, Requirement};
use crate::store::Options;

/// A condition over option values.
///
/// Serialized externally tagged: `always`, `{enabled: key}`,
/// `{equals: {key, value}}`, `{any: [...]}`, `{all: [...]}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    #[default]
    Always,
    /// The toggle is on.
    Enabled(String),
    /// The option's text equals `value`.
    Equals { key: String, value: Value },
    /// At least one holds.
    Any(Vec<Condition>),
    /// All hold.
    All(Vec<Condition>),
}

impl Condition {
    pub fn enabled(key: &str) -> Self {
        Condition::Enabled(key.to_string())
    }

    pub fn equals(key: &str, value: impl Into<Value>) -> Self {
        Condition::Equals {
            key: key.to_string(),
            value: value.into(),
        }
    }

    /// Evaluates the condition against current option values.
    pub fn holds(&self, options: &Options<'_>) -> bool {
        match self {
            Condition::Always => true,
            Condition::Enabled(key) => options.is_enabled(key),
            Condition::Equals { key, value } => {
                Requirement::new(key.as_str(), Operator::Eq, value.clone()).is_met(&options.get(key))
            }
            Condition::Any(conditions) => conditions.iter().any(|c| c.holds(options)),
            Condition::All(conditions) => conditions.iter().all(|c| c.holds(options)),
        }
    }

    /// Option keys the condition reads.
    pub fn keys(&self) -> Vec<&str> {
        match self {
            Condition::Always => Vec::new(),
            Condition::Enabled(key) | Condition::Equals { key, .. } => vec![key.as_str()],
            Condition::Any(conditions) | Condition::All(conditions) => {
                conditions.iter().flat_map(Condition::keys).collect()
            }
        }
    }
}

/// One `color` declaration per set field of a color-group option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorTarget {
    /// Field of the color-group value, e.g. `link-hover-color`.
    pub field: String,
    pub selector: String,
    /// Declared property, `color` unless given.
    #[serde(default = "default_color_property")]
    pub property: String,
}

fn default_color_property() -> String {
    "color".to_string()
}

impl ColorTarget {
    pub fn new(field: &str, selector: &str) -> Self {
        Self {
            field: field.to_string(),
            selector: selector.to_string(),
            property: default_color_property(),
        }
    }
}

fn yes() -> bool {
    true
}

fn px() -> String {
    "px".to_string()
}

/// One compiler invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Rule {
    Spacing {
        selector: String,
        property: String,
        key: String,
        #[serde(default = "yes")]
        responsive: bool,
    },
    Range {
        selector: String,
        property: String,
        key: String,
        #[serde(default = "yes")]
        responsive: bool,
        #[serde(default = "px")]
        unit: String,
    },
    Typography {
        selector: String,
        key: String,
    },
    Design {
        selector: String,
        key: String,
        kind: DesignKind,
    },
    /// Writes selected fields of a color-group option, skipping empty ones.
    Colors {
        key: String,
        targets: Vec<ColorTarget>,
    },
    /// A literal CSS template rendered with the values of `reads`.
    Block {
        owner: String,
        #[serde(default)]
        reads: Vec<String>,
        template: String,
    },
    /// The option's text, appended verbatim.
    Raw {
        key: String,
    },
}

impl Rule {
    pub fn spacing(selector: &str, property: &str, key: &str) -> Self {
        Rule::Spacing {
            selector: selector.to_string(),
            property: property.to_string(),
            key: key.to_string(),
            responsive: true,
        }
    }

    pub fn range(selector: &str, property: &str, key: &str, responsive: bool, unit: &str) -> Self {
        Rule::Range {
            selector: selector.to_string(),
            property: property.to_string(),
            key: key.to_string(),
            responsive,
            unit: unit.to_string(),
        }
    }

    pub fn typography(selector: &str, key: &str) -> Self {
        Rule::Typography {
            selector: selector.to_string(),
            key: key.to_string(),
        }
    }

    pub fn design(selector: &str, key: &str, kind: DesignKind) -> Self {
        Rule::Design {
            selector: selector.to_string(),
            key: key.to_string(),
            kind,
        }
    }

    pub fn colors(key: &str, targets: &[(&str, &str)]) -> Self {
        Rule::Colors {
            key: key.to_string(),
            targets: targets
                .iter()
                .map(|(field, selector)| ColorTarget::new(field, selector))
                .collect(),
        }
    }

    /// A template block. `reads[0]` is the owner.
    pub fn block(reads: &[&str], template: &str) -> Self {
        let owner = reads.first().copied().unwrap_or_default();
        Self::owned_block(owner, reads, template)
    }

    /// A template block written to a style element other than its first read key.
    pub fn owned_block(owner: &str, reads: &[&str], template: &str) -> Self {
        Rule::Block {
            owner: owner.to_string(),
            reads: reads.iter().map(|k| k.to_string()).collect(),
            template: template.to_string(),
        }
    }

    pub fn raw(key: &str) -> Self {
        Rule::Raw {
            key: key.to_string(),
        }
    }

    /// Id of the style element this rule's output belongs to.
    pub fn owner(&self) -> &str {
        match self {
            Rule::Spacing { key, .. }
            | Rule::Range { key, .. }
            | Rule::Typography { key, .. }
            | Rule::Design { key, .. }
            | Rule::Colors { key, .. }
            | Rule::Raw { key } => key,
            Rule::Block { owner, .. } => owner,
        }
    }

    /// Option keys the rule's output depends on, not counting area gates.
    pub fn reads(&self) -> Vec<&str> {
        match self {
            Rule::Block { reads, .. } => reads.iter().map(String::as_str).collect(),
            other => vec![other.owner()],
        }
    }
}

/// A themeable area: a gate and the rules it governs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub name: String,
    #[serde(default)]
    pub gate: Condition,
    pub rules: Vec<Rule>,
}

impl Area {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            gate: Condition::Always,
            rules: Vec::new(),
        }
    }

    pub fn gate(mut self, gate: Condition) -> Self {
        self.gate = gate;
        self
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }
}

/// An ordered table of areas. Output order is table order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RuleSet {
    areas: Vec<Area>,
}

impl RuleSet {
    pub fn new(areas: Vec<Area>) -> Self {
        Self { areas }
    }

    /// The theme's built-in table.
    pub fn builtin() -> Self {
        builtin::rule_set()
    }

    /// The block editor's table, run over [`editor::schema`](crate::editor::schema).
    pub fn editor() -> Self {
        editor::rule_set()
    }

    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    pub fn push(&mut self, area: Area) {
        self.areas.push(area);
    }

    /// Parses a table from YAML (a list of areas under `areas`).
    pub fn from_yaml(source: &str) -> Result<Self, StyleError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_json(source: &str) -> Result<Self, StyleError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn to_json(&self) -> Result<String, StyleError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Every rule with its area, in output order.
    pub fn rules(&self) -> impl Iterator<Item = (&Area, &Rule)> {
        self.areas
            .iter()
            .flat_map(|area| area.rules.iter().map(move |rule| (area, rule)))
    }
}
