//! The options store and the schema-aware resolver over it.
//!
//! An [`OptionsStore`] is a plain key → value mapping populated by the host
//! (saved settings, a preview session's pending changes, a test fixture). The
//! engine never writes to it. [`Options`] layers the schema over a store:
//! missing keys and values of the wrong shape resolve to the schema default.
//!
//! ```rust
//! use prisma_styles::{MemoryStore, Options, schema::Schema};
//! use serde_json::json;
//!
//! let mut store = MemoryStore::new();
//! store.set("sidebar_width", json!(25));
//!
//! let options = Options::new(&store, Schema::builtin());
//! assert_eq!(options.get("sidebar_width"), json!(25));
//! assert_eq!(options.get("container_width"), json!(1200));
//! ```

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::error::StyleError;
use crate::schema::{OptionKind, Schema};
use crate::value::{as_text, is_truthy};

/// Read access to stored option values.
///
/// Returns `None` when the key has never been stored.
pub trait OptionsStore {
    fn get(&self, key: &str) -> Option<Value>;
}

impl OptionsStore for HashMap<String, Value> {
    fn get(&self, key: &str) -> Option<Value> {
        HashMap::get(self, key).cloned()
    }
}

impl OptionsStore for Map<String, Value> {
    fn get(&self, key: &str) -> Option<Value> {
        Map::get(self, key).cloned()
    }
}

impl<S: OptionsStore + ?Sized> OptionsStore for &S {
    fn get(&self, key: &str) -> Option<Value> {
        (**self).get(key)
    }
}

/// An in-memory store, preserving insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    values: Map<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value, returning the previous one.
    pub fn set(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.values.insert(key.into(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parses a JSON object of option values.
    pub fn from_json(source: &str) -> Result<Self, StyleError> {
        Self::from_value(serde_json::from_str(source)?)
    }

    /// Parses a YAML mapping of option values.
    ///
    /// An empty document yields an empty store.
    pub fn from_yaml(source: &str) -> Result<Self, StyleError> {
        if source.trim().is_empty() {
            return Ok(Self::new());
        }
        Self::from_value(serde_yaml::from_str(source)?)
    }

    fn from_value(value: Value) -> Result<Self, StyleError> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            Value::Null => Ok(Self::new()),
            other => Err(StyleError::NotAMapping {
                found: type_name(&other),
            }),
        }
    }
}

impl OptionsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }
}

impl FromIterator<(String, Value)> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "mapping",
    }
}

/// Schema-aware view over a store.
///
/// Every read goes through [`Options::get`], which never fails: absent keys,
/// `null`, and values whose shape does not fit the declared kind all resolve
/// to the schema default.
#[derive(Clone, Copy)]
pub struct Options<'a> {
    store: &'a dyn OptionsStore,
    schema: &'a Schema,
}

impl<'a> Options<'a> {
    pub fn new(store: &'a dyn OptionsStore, schema: &'a Schema) -> Self {
        Self { store, schema }
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    /// Current value of `key`, falling back to the schema default.
    pub fn get(&self, key: &str) -> Value {
        match self.store.get(key) {
            Some(value) if !value.is_null() && self.fits(key, &value) => value,
            Some(value) if !value.is_null() => {
                tracing::debug!(key, found = type_name(&value), "option value has unexpected shape, using default");
                self.schema.default_for(key).clone()
            }
            _ => self.schema.default_for(key).clone(),
        }
    }

    /// Whether a feature toggle is on.
    pub fn is_enabled(&self, key: &str) -> bool {
        is_truthy(&self.get(key))
    }

    /// The value of `key` as text, empty when it is not a scalar.
    pub fn text(&self, key: &str) -> String {
        as_text(&self.get(key)).unwrap_or_default()
    }

    /// Whether every requirement declared for `key` currently holds.
    pub fn is_active(&self, key: &str) -> bool {
        self.schema.is_active(key, |other| self.get(other))
    }

    fn fits(&self, key: &str, value: &Value) -> bool {
        let Some(spec) = self.schema.get(key) else {
            return true;
        };
        match spec.kind {
            kind if kind.is_structured() => value.is_object(),
            OptionKind::Range => !value.is_array(),
            OptionKind::Toggle => !(value.is_array() || value.is_object()),
            OptionKind::Color | OptionKind::Select | OptionKind::Number | OptionKind::Text => {
                value.is_string() || value.is_number()
            }
            _ => true,
        }
    }
}

impl std::fmt::Debug for Options<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Options")
            .field("schema_len", &self.schema.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::OptionSpec;
    use serde_json::json;

    fn schema() -> Schema {
        Schema::new()
            .option(OptionSpec::color("accent_color", "#3857f1"))
            .option(OptionSpec::toggle("enable_footer", true))
            .option(OptionSpec::border("footer_border", json!({"border-style": "solid"})))
    }

    #[test]
    fn test_missing_key_uses_default() {
        let schema = schema();
        let store = MemoryStore::new();
        let options = Options::new(&store, &schema);
        assert_eq!(options.get("accent_color"), json!("#3857f1"));
        assert!(options.is_enabled("enable_footer"));
        assert_eq!(options.get("undeclared"), Value::Null);
    }

    #[test]
    fn test_stored_value_wins() {
        let schema = schema();
        let mut store = MemoryStore::new();
        store.set("accent_color", json!("#FF0000"));
        store.set("enable_footer", json!(false));
        let options = Options::new(&store, &schema);
        assert_eq!(options.text("accent_color"), "#FF0000");
        assert!(!options.is_enabled("enable_footer"));
    }

    #[test]
    fn test_null_and_misshapen_values_use_default() {
        let schema = schema();
        let mut store = MemoryStore::new();
        store.set("accent_color", Value::Null);
        store.set("footer_border", json!("solid"));
        let options = Options::new(&store, &schema);
        assert_eq!(options.get("accent_color"), json!("#3857f1"));
        assert_eq!(options.get("footer_border"), json!({"border-style": "solid"}));
    }

    #[test]
    fn test_from_json_requires_mapping() {
        let store = MemoryStore::from_json(r##"{"accent_color": "#000"}"##).unwrap();
        assert_eq!(store.len(), 1);

        let err = MemoryStore::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, StyleError::NotAMapping { found: "array" }));
    }

    #[test]
    fn test_from_yaml() {
        let store = MemoryStore::from_yaml(
            "top_bar_enable: true\nlogo_margin:\n  desktop: {top: 10}\n  unit: px\n",
        )
        .unwrap();
        assert_eq!(OptionsStore::get(&store, "top_bar_enable"), Some(json!(true)));
        assert_eq!(
            OptionsStore::get(&store, "logo_margin"),
            Some(json!({"desktop": {"top": 10}, "unit": "px"}))
        );
        assert!(MemoryStore::from_yaml("").unwrap().is_empty());
        assert!(MemoryStore::from_yaml("- a\n- b\n").is_err());
    }

    #[test]
    fn test_hashmap_is_a_store() {
        let mut map = HashMap::new();
        map.insert("accent_color".to_string(), json!("#111111"));
        let schema = schema();
        let options = Options::new(&map, &schema);
        assert_eq!(options.text("accent_color"), "#111111");
    }

    #[test]
    fn test_is_active_reads_through_store() {
        let schema = Schema::new()
            .option(OptionSpec::toggle("breadcrumbs_enable", false))
            .option(
                OptionSpec::background("breadcrumbs_background", json!({}))
                    .requires("breadcrumbs_enable", crate::schema::Operator::Eq, true),
            );
        let mut store = MemoryStore::new();
        assert!(!Options::new(&store, &schema).is_active("breadcrumbs_background"));
        store.set("breadcrumbs_enable", json!(true));
        assert!(Options::new(&store, &schema).is_active("breadcrumbs_background"));
    }
}
