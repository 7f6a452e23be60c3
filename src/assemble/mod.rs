//! The style assembler: runs a rule table against an options store.
//!
//! One [`StyleAssembler`] serves both output paths:
//!
//! - [`build`](StyleAssembler::build) produces the full stylesheet (cache
//!   rebuilds, inline fallback),
//! - [`build_slot`](StyleAssembler::build_slot) produces only the rules
//!   written to one live style element (preview updates).
//!
//! Both walk the same table through the same [`fragments`] pass, so a
//! stylesheet built in one go and one patched slot by slot contain exactly
//! the same rules.
//!
//! A slot is a run of consecutive rules with the same owner. Each slot is
//! one style element in the preview document; an owner whose rules are
//! split across the table gets one slot per run (`accent_color`,
//! `accent_color-2`, ...). Writing the slots in table order reproduces the
//! batch stylesheet byte for byte.
//!
//! ```rust
//! use prisma_styles::{EngineConfig, MemoryStore, StyleAssembler};
//! use serde_json::json;
//!
//! let assembler = StyleAssembler::new(EngineConfig::default()).unwrap();
//! let mut store = MemoryStore::new();
//! store.set("sidebar_width", json!(25));
//!
//! let sheet = assembler.build(&store);
//! assert!(sheet.css.contains("max-width: 75%;"));
//! ```
//!
//! [`fragments`]: StyleAssembler::fragments

mod filters;
mod renderer;

pub use renderer::Renderer;

use std::collections::HashMap;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::compile::{design, range, spacing, typography, Context};
use crate::config::{EngineConfig, FontConfig};
use crate::error::StyleError;
use crate::fonts::{hosted_fonts_url, FontCatalog, FontLoads, FontRequest};
use crate::minify::minify;
use crate::rules::{Area, ColorTarget, Rule, RuleSet};
use crate::schema::Schema;
use crate::store::{Options, OptionsStore};
use crate::value::field;

/// The CSS produced by one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    /// Name of the area the rule belongs to.
    pub area: String,
    /// Option key that owns the rule.
    pub owner: String,
    /// Style element the fragment is written to during live preview.
    pub slot: String,
    pub css: String,
}

/// The result of a generation pass: unminified CSS and the hosted fonts it
/// needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stylesheet {
    pub css: String,
    pub fonts: Vec<FontRequest>,
}

impl Stylesheet {
    pub fn is_empty(&self) -> bool {
        self.css.trim().is_empty()
    }

    /// The stylesheet run through [`minify`].
    pub fn minified(&self) -> String {
        minify(&self.css)
    }

    /// URL loading every requested hosted font, if any.
    pub fn fonts_url(&self, fonts: &FontConfig) -> Option<String> {
        hosted_fonts_url(&fonts.hosted_url, &self.fonts, &fonts.weights)
    }
}

/// Compiles a rule table into CSS.
#[derive(Debug)]
pub struct StyleAssembler {
    config: EngineConfig,
    schema: Schema,
    rules: RuleSet,
    /// Slot id of every rule, by table index.
    slots: Vec<String>,
    renderer: Renderer,
}

impl StyleAssembler {
    /// An assembler over the built-in schema and rule table.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Template`] if a block template fails to compile.
    pub fn new(config: EngineConfig) -> Result<Self, StyleError> {
        Self::with_rules(config, RuleSet::builtin(), Schema::builtin().clone())
    }

    /// An assembler over the block editor's table.
    ///
    /// Build it against an [`EditorDocument`](crate::editor::EditorDocument)
    /// so the document keys resolve.
    pub fn editor(config: EngineConfig) -> Result<Self, StyleError> {
        Self::with_rules(config, RuleSet::editor(), crate::editor::schema())
    }

    /// An assembler over a custom rule table and schema.
    ///
    /// Every block template is compiled here, so a broken table fails at
    /// construction rather than during a generation pass.
    pub fn with_rules(config: EngineConfig, rules: RuleSet, schema: Schema) -> Result<Self, StyleError> {
        let mut renderer = Renderer::new();
        for (index, (area, rule)) in rules.rules().enumerate() {
            if let Rule::Block { template, .. } = rule {
                renderer.add_template(&template_name(area, index), template)?;
            }
        }
        let slots = slot_ids(&rules);
        Ok(Self {
            config,
            schema,
            rules,
            slots,
            renderer,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Runs every rule whose area gate holds and whose options are active,
    /// returning the non-empty fragments in table order.
    ///
    /// Hosted fonts requested by typography rules are added to `loads`.
    pub fn fragments(&self, store: &dyn OptionsStore, loads: &mut FontLoads) -> Vec<Fragment> {
        self.collect(store, loads, |_, _| true)
    }

    /// Builds the full stylesheet.
    pub fn build(&self, store: &dyn OptionsStore) -> Stylesheet {
        let sheet = self.assemble(store, |_, _| true);
        debug!(bytes = sheet.css.len(), fonts = sheet.fonts.len(), "stylesheet assembled");
        sheet
    }

    /// Builds only the rules owned by `owner`, wherever they sit in the table.
    ///
    /// The result equals the batch fragments of `owner` joined in order.
    pub fn build_owner(&self, store: &dyn OptionsStore, owner: &str) -> Stylesheet {
        self.assemble(store, |_, rule| rule.owner() == owner)
    }

    /// Builds only the rules of the style element `slot`.
    pub fn build_slot(&self, store: &dyn OptionsStore, slot: &str) -> Stylesheet {
        self.assemble(store, |index, _| self.slots[index] == slot)
    }

    /// Owners whose output depends on `key`, in table order.
    ///
    /// A rule depends on the keys it reads, on its area's gate keys and on
    /// the requirement keys of the options it reads.
    pub fn owners_reading(&self, key: &str) -> Vec<&str> {
        let mut owners: Vec<&str> = Vec::new();
        for (area, rule) in self.rules.rules() {
            if self.depends(area, rule, key) && !owners.contains(&rule.owner()) {
                owners.push(rule.owner());
            }
        }
        owners
    }

    /// Slots whose output depends on `key`, in table order.
    pub fn slots_reading(&self, key: &str) -> Vec<&str> {
        let mut slots: Vec<&str> = Vec::new();
        for ((area, rule), slot) in self.rules.rules().zip(&self.slots) {
            if self.depends(area, rule, key) && !slots.contains(&slot.as_str()) {
                slots.push(slot);
            }
        }
        slots
    }

    /// Every owner of the table, in order of first appearance.
    pub fn owners(&self) -> Vec<&str> {
        let mut owners: Vec<&str> = Vec::new();
        for (_, rule) in self.rules.rules() {
            if !owners.contains(&rule.owner()) {
                owners.push(rule.owner());
            }
        }
        owners
    }

    /// Every slot of the table, in table order.
    pub fn slots(&self) -> Vec<&str> {
        let mut slots: Vec<&str> = Vec::new();
        for slot in &self.slots {
            if slots.last() != Some(&slot.as_str()) {
                slots.push(slot);
            }
        }
        slots
    }

    fn depends(&self, area: &Area, rule: &Rule, key: &str) -> bool {
        let reads = rule.reads();
        reads.contains(&key)
            || area.gate.keys().contains(&key)
            || reads
                .iter()
                .any(|read| self.schema.requirement_keys(read).any(|k| k == key))
    }

    fn assemble(&self, store: &dyn OptionsStore, include: impl Fn(usize, &Rule) -> bool) -> Stylesheet {
        let mut loads = FontLoads::new();
        let fragments = self.collect(store, &mut loads, include);
        let css: Vec<String> = fragments.into_iter().map(|f| f.css).collect();
        Stylesheet {
            css: css.join("\n"),
            fonts: loads.into_vec(),
        }
    }

    fn collect(
        &self,
        store: &dyn OptionsStore,
        loads: &mut FontLoads,
        include: impl Fn(usize, &Rule) -> bool,
    ) -> Vec<Fragment> {
        let options = Options::new(store, &self.schema);
        let ctx = Context {
            breakpoints: self.config.breakpoints,
            fonts: FontCatalog::builtin(),
            legacy_gradient_prefixes: self.config.legacy_gradient_prefixes,
        };

        let mut fragments = Vec::new();
        let mut index = 0;
        for area in self.rules.areas() {
            let first = index;
            index += area.rules.len();
            if !area.rules.iter().enumerate().any(|(offset, rule)| include(first + offset, rule)) {
                continue;
            }
            if !area.gate.holds(&options) {
                debug!(area = %area.name, "area disabled");
                continue;
            }
            for (offset, rule) in area.rules.iter().enumerate() {
                let index = first + offset;
                if !include(index, rule) || !rule.reads().iter().all(|key| options.is_active(key)) {
                    continue;
                }
                let css = self.compile(area, index, rule, &options, &ctx, loads);
                if css.trim().is_empty() {
                    continue;
                }
                fragments.push(Fragment {
                    area: area.name.clone(),
                    owner: rule.owner().to_string(),
                    slot: self.slots[index].clone(),
                    css,
                });
            }
        }
        fragments
    }

    fn compile(
        &self,
        area: &Area,
        index: usize,
        rule: &Rule,
        options: &Options<'_>,
        ctx: &Context<'_>,
        loads: &mut FontLoads,
    ) -> String {
        match rule {
            Rule::Spacing {
                selector,
                property,
                key,
                responsive,
            } => spacing(ctx, selector, property, &options.get(key), *responsive),
            Rule::Range {
                selector,
                property,
                key,
                responsive,
                unit,
            } => range(ctx, selector, property, &options.get(key), *responsive, unit),
            Rule::Typography { selector, key } => typography(ctx, selector, &options.get(key), loads),
            Rule::Design { selector, key, kind } => design(ctx, selector, &options.get(key), *kind),
            Rule::Colors { key, targets } => colors(&options.get(key), targets),
            Rule::Block { reads, .. } => {
                let values: Map<String, Value> = reads
                    .iter()
                    .map(|key| (key.clone(), options.get(key)))
                    .collect();
                let name = template_name(area, index);
                match self.renderer.render(&name, &values) {
                    Ok(css) => css.trim().to_string(),
                    Err(err) => {
                        warn!(template = %name, error = %err, "style block failed to render, omitting it");
                        String::new()
                    }
                }
            }
            Rule::Raw { key } => options.text(key),
        }
    }
}

fn template_name(area: &Area, index: usize) -> String {
    format!("{}/{}", area.name, index)
}

/// Slot id of every rule: the owner for its first run, `owner-N` for the
/// N-th.
fn slot_ids(rules: &RuleSet) -> Vec<String> {
    let mut runs: HashMap<&str, usize> = HashMap::new();
    let mut ids: Vec<String> = Vec::new();
    let mut previous: Option<&str> = None;
    for (_, rule) in rules.rules() {
        let owner = rule.owner();
        if previous != Some(owner) {
            *runs.entry(owner).or_default() += 1;
        }
        previous = Some(owner);
        ids.push(match runs[owner] {
            1 => owner.to_string(),
            n => format!("{owner}-{n}"),
        });
    }
    ids
}

/// One `selector{ property: color; }` block per set field of a colour group.
fn colors(value: &Value, targets: &[ColorTarget]) -> String {
    let Some(object) = value.as_object() else {
        return String::new();
    };
    targets
        .iter()
        .filter_map(|target| {
            let color = field(object, &target.field)?.as_str()?.trim();
            if color.is_empty() {
                return None;
            }
            Some(format!("{}{{ {}: {}; }}", target.selector, target.property, color))
        })
        .collect()
}
