//! The block editor stylesheet.
//!
//! The editor canvas is styled by its own rule table
//! ([`RuleSet::editor`](crate::rules::RuleSet::editor)), run through a
//! regular [`StyleAssembler`](crate::StyleAssembler). A few rules depend on
//! the document being edited rather than on theme options. [`EditorDocument`]
//! layers those facts over the saved options.
//!
//! ```rust
//! use prisma_styles::editor::EditorDocument;
//! use prisma_styles::{EngineConfig, MemoryStore, StyleAssembler};
//! use serde_json::json;
//!
//! let assembler = StyleAssembler::editor(EngineConfig::default()).unwrap();
//! let mut store = MemoryStore::new();
//! store.set("site_layout", json!("boxed"));
//!
//! let css = assembler.build(&EditorDocument::new(&store, "page")).css;
//! assert!(css.contains("max-width: 1300px;"));
//! ```

use serde_json::Value;

use crate::schema::{OptionSpec, Schema};
use crate::store::OptionsStore;

/// Post type of the edited document.
pub const POST_TYPE: &str = "editor_post_type";
/// Whether the edited document shows a sidebar.
pub const SIDEBAR_DISPLAYED: &str = "editor_sidebar_displayed";

/// The built-in schema plus the document keys.
pub fn schema() -> Schema {
    Schema::builtin()
        .clone()
        .option(OptionSpec::select(POST_TYPE, "page"))
        .option(OptionSpec::toggle(SIDEBAR_DISPLAYED, false))
}

/// Saved options seen from one document in the editor.
pub struct EditorDocument<'a> {
    store: &'a dyn OptionsStore,
    post_type: String,
    sidebar_displayed: bool,
    site_layout: Option<String>,
}

impl<'a> EditorDocument<'a> {
    pub fn new(store: &'a dyn OptionsStore, post_type: &str) -> Self {
        Self {
            store,
            post_type: post_type.to_string(),
            sidebar_displayed: false,
            site_layout: None,
        }
    }

    pub fn with_sidebar(mut self, displayed: bool) -> Self {
        self.sidebar_displayed = displayed;
        self
    }

    /// Overrides the site layout for this document only.
    pub fn with_site_layout(mut self, layout: &str) -> Self {
        self.site_layout = Some(layout.to_string());
        self
    }
}

impl OptionsStore for EditorDocument<'_> {
    fn get(&self, key: &str) -> Option<Value> {
        match key {
            POST_TYPE => Some(Value::String(self.post_type.clone())),
            SIDEBAR_DISPLAYED => Some(Value::Bool(self.sidebar_displayed)),
            "site_layout" => self
                .site_layout
                .clone()
                .map(Value::String)
                .or_else(|| self.store.get(key)),
            _ => self.store.get(key),
        }
    }
}

impl std::fmt::Debug for EditorDocument<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorDocument")
            .field("post_type", &self.post_type)
            .field("sidebar_displayed", &self.sidebar_displayed)
            .field("site_layout", &self.site_layout)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EngineConfig, MemoryStore, StyleAssembler};
    use serde_json::json;

    fn build(doc: &EditorDocument<'_>) -> String {
        StyleAssembler::editor(EngineConfig::default()).unwrap().build(doc).css
    }

    #[test]
    fn test_document_keys_shadow_the_store() {
        let mut store = MemoryStore::new();
        store.set(POST_TYPE, json!("product"));
        store.set("site_layout", json!("boxed"));
        store.set("accent_color", json!("#000000"));

        let doc = EditorDocument::new(&store, "post").with_sidebar(true);
        assert_eq!(doc.get(POST_TYPE), Some(json!("post")));
        assert_eq!(doc.get(SIDEBAR_DISPLAYED), Some(json!(true)));
        assert_eq!(doc.get("site_layout"), Some(json!("boxed")));
        assert_eq!(doc.get("accent_color"), Some(json!("#000000")));

        let doc = doc.with_site_layout("fw-stretched");
        assert_eq!(doc.get("site_layout"), Some(json!("fw-stretched")));
    }

    #[test]
    fn test_defaults() {
        let store = MemoryStore::new();
        let css = build(&EditorDocument::new(&store, "page"));

        assert!(css.starts_with("html{font-size:"));
        assert!(css.contains("background-color: rgba(56,87,241,0.09);"));
        assert!(css.contains("border-color: #3857f1;"));
        assert!(css.contains(".editor-styles-wrapper .wp-block {\n\tmax-width: 1100px;\n}"));
        assert!(css.contains(":root .editor-styles-wrapper {\n\tbackground-color: #ffffff;\n}"));
        assert!(css.contains("color: #30373e;"));
        assert!(css.contains("-webkit-font-smoothing: antialiased;"));
        assert!(!css.contains("interface-interface-skeleton__content"));
    }

    #[test]
    fn test_sidebar_narrows_the_canvas() {
        let mut store = MemoryStore::new();
        store.set("sidebar_width", json!(25));
        store.set("container_width", json!(1140));
        let css = build(&EditorDocument::new(&store, "page").with_sidebar(true));
        // (1140 - 100) * 75% - 50
        assert!(css.contains("max-width: 730px;"));
    }

    #[test]
    fn test_boxed_layouts() {
        let mut store = MemoryStore::new();
        store.set("site_layout", json!("boxed"));
        store.set("background_color", json!("#eeeeee"));
        store.set("boxed_content_background_color", json!("#fafafa"));
        let css = build(&EditorDocument::new(&store, "page"));
        assert!(css.contains(".editor-styles-wrapper {\n\tmax-width: 1300px;\n\tmargin: 0 auto;\n}"));
        assert!(css.contains("padding-left: 42px;"));
        assert!(css.contains(
            ":root .edit-post-layout .interface-interface-skeleton__content {\n\tbackground-color: #eeeeee;\n}"
        ));
        assert!(css.contains(":root .editor-styles-wrapper {\n\tbackground-color: #fafafa;\n}"));

        store.set("site_layout", json!("boxed-separated"));
        store.set("sidebar_style", json!("3"));
        let css = build(&EditorDocument::new(&store, "page").with_sidebar(true));
        // (1200 - 100) * 70% - 50 + 15 + 16
        assert!(css.contains("max-width: 751px;"));
        assert!(css.contains("border: 1px solid rgba(0, 0, 0, 0.085);"));
        assert!(!css.contains("padding-left: 42px;"));
    }

    #[test]
    fn test_stretched_layout_lifts_the_width() {
        let store = MemoryStore::new();
        let css = build(&EditorDocument::new(&store, "page").with_site_layout("fw-stretched"));
        assert!(css.contains(".editor-styles-wrapper .wp-block {\n\tmax-width: none;\n}"));
        assert!(!css.contains("max-width: 1100px;"));
    }

    #[test]
    fn test_post_only_rules() {
        let mut store = MemoryStore::new();
        store.set("single_content_width", json!("narrow"));
        store.set("single_narrow_container_width", json!(640));
        store.set("single_content_font_size", json!({"value": 19}));

        let page = build(&EditorDocument::new(&store, "page"));
        assert!(!page.contains("max-width: 640px;"));
        assert!(!page.contains(":root .editor-styles-wrapper .wp-block{font-size:"));

        let post = build(&EditorDocument::new(&store, "post"));
        assert!(post.contains("max-width: 640px;"));
        assert!(post.contains(":root .editor-styles-wrapper .wp-block{font-size: 19px; }"));
    }

    #[test]
    fn test_font_smoothing_toggle() {
        let mut store = MemoryStore::new();
        store.set("font_smoothing", json!(false));
        let css = build(&EditorDocument::new(&store, "page"));
        assert!(!css.contains("font-smoothing"));
    }
}
