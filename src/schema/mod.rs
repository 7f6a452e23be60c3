//! The option schema: every themeable setting, its type and its default.
//!
//! The schema is the single source of fallbacks. When the options store has
//! no value for a key, [`Schema::default_for`] supplies it, so the compilers
//! only ever see "configured" or "defaulted" values, never "missing" ones.
//!
//! Options may also be *conditionally active*: an option carrying
//! [`Requirement`]s is only active while every requirement holds against the
//! current values of other options. Rules owned by an inactive option are
//! skipped by the assembler exactly like rules of a disabled area.
//!
//! ```rust
//! use prisma_styles::schema::Schema;
//! use serde_json::json;
//!
//! let schema = Schema::builtin();
//! assert_eq!(schema.default_for("sidebar_width"), &json!(30));
//! assert!(schema.get("accent_color").is_some());
//! ```

mod builtin;
mod option;

pub use option::{OptionKind, OptionSpec, Operator, Requirement};

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde_json::Value;

static NULL: Value = Value::Null;

static BUILTIN: Lazy<Schema> = Lazy::new(builtin::schema);

/// A collection of option declarations keyed by option key.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    options: HashMap<String, OptionSpec>,
}

impl Schema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// The theme's built-in schema.
    pub fn builtin() -> &'static Schema {
        &BUILTIN
    }

    /// Adds (or replaces) a declaration, returning the schema for chaining.
    pub fn option(mut self, spec: OptionSpec) -> Self {
        self.insert(spec);
        self
    }

    /// Adds (or replaces) a declaration.
    pub fn insert(&mut self, spec: OptionSpec) {
        self.options.insert(spec.key.clone(), spec);
    }

    pub fn get(&self, key: &str) -> Option<&OptionSpec> {
        self.options.get(key)
    }

    /// The declared default of `key`, or `null` for undeclared keys.
    pub fn default_for(&self, key: &str) -> &Value {
        self.options.get(key).map(|s| &s.default).unwrap_or(&NULL)
    }

    /// Whether every requirement of `key` holds. Undeclared keys and keys
    /// without requirements are always active.
    ///
    /// `lookup` resolves the current value of another option.
    pub fn is_active(&self, key: &str, lookup: impl Fn(&str) -> Value) -> bool {
        match self.options.get(key) {
            Some(spec) => spec.requires.iter().all(|req| req.is_met(&lookup(&req.key))),
            None => true,
        }
    }

    /// Keys that `key`'s activity depends on.
    pub fn requirement_keys(&self, key: &str) -> impl Iterator<Item = &str> {
        self.options
            .get(key)
            .into_iter()
            .flat_map(|spec| spec.requires.iter().map(|r| r.key.as_str()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// All declarations, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &OptionSpec> {
        self.options.values()
    }
}
