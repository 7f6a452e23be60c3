//! Live style elements for preview documents.

use std::collections::HashMap;
use std::fmt::Write as _;

/// Prefix of every live style element id.
pub const STYLE_ID_PREFIX: &str = "prisma-core-dynamic-";

/// A document that can hold style and link elements.
///
/// Implemented by whatever renders the preview. `Handle` identifies an
/// element created by this host.
pub trait StyleHost {
    type Handle;

    /// Appends a `<style>` element.
    fn create_style(&mut self, id: &str, css: &str) -> Self::Handle;

    /// Replaces the text of a `<style>` element.
    fn set_style_text(&mut self, handle: &Self::Handle, css: &str);

    /// Appends a stylesheet `<link>` element.
    fn create_link(&mut self, id: &str, href: &str) -> Self::Handle;

    /// Points a `<link>` element at a new URL.
    fn set_link_href(&mut self, handle: &Self::Handle, href: &str);
}

/// Keeps one style element per owner key, creating it on first use and
/// rewriting its text afterwards.
pub struct LiveSink<H: StyleHost> {
    host: H,
    styles: HashMap<String, H::Handle>,
    links: HashMap<String, H::Handle>,
}

impl<H: StyleHost> LiveSink<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            styles: HashMap::new(),
            links: HashMap::new(),
        }
    }

    /// Element id of `key`'s style element, e.g. `prisma-core-dynamic-accent_color`.
    pub fn style_id(key: &str) -> String {
        format!("{STYLE_ID_PREFIX}{key}")
    }

    /// Creates an empty style element for `key` unless it already exists.
    ///
    /// Reserving keys up front fixes the document order of their elements.
    pub fn reserve(&mut self, key: &str) {
        if !self.styles.contains_key(key) {
            let handle = self.host.create_style(&Self::style_id(key), "");
            self.styles.insert(key.to_string(), handle);
        }
    }

    /// Sets the CSS of `key`'s style element.
    pub fn apply(&mut self, key: &str, css: &str) {
        match self.styles.get(key) {
            Some(handle) => self.host.set_style_text(handle, css),
            None => {
                let handle = self.host.create_style(&Self::style_id(key), css);
                self.styles.insert(key.to_string(), handle);
            }
        }
    }

    /// Sets the URL of the `<link>` element `id`.
    pub fn apply_link(&mut self, id: &str, href: &str) {
        match self.links.get(id) {
            Some(handle) => self.host.set_link_href(handle, href),
            None => {
                let handle = self.host.create_link(id, href);
                self.links.insert(id.to_string(), handle);
            }
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ElementKind {
    Style,
    Link,
}

#[derive(Debug, Clone)]
struct Element {
    kind: ElementKind,
    id: String,
    content: String,
}

/// An in-memory [`StyleHost`] that records elements in creation order.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    elements: Vec<Element>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the style element `id`.
    pub fn style_text(&self, id: &str) -> Option<&str> {
        self.find(ElementKind::Style, id)
    }

    /// URL of the link element `id`.
    pub fn link_href(&self, id: &str) -> Option<&str> {
        self.find(ElementKind::Link, id)
    }

    /// Number of elements with the given id.
    pub fn count(&self, id: &str) -> usize {
        self.elements.iter().filter(|e| e.id == id).count()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Ids of all style elements, in creation order.
    pub fn style_ids(&self) -> impl Iterator<Item = &str> {
        self.elements
            .iter()
            .filter(|e| e.kind == ElementKind::Style)
            .map(|e| e.id.as_str())
    }

    /// Concatenated text of all style elements, in creation order.
    pub fn css(&self) -> String {
        self.elements
            .iter()
            .filter(|e| e.kind == ElementKind::Style && !e.content.is_empty())
            .map(|e| e.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Renders the elements as HTML head markup.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for element in &self.elements {
            let _ = match element.kind {
                ElementKind::Style => writeln!(html, "<style id=\"{}\">{}</style>", element.id, element.content),
                ElementKind::Link => writeln!(
                    html,
                    "<link rel=\"stylesheet\" id=\"{}\" href=\"{}\" media=\"all\" />",
                    element.id, element.content
                ),
            };
        }
        html
    }

    fn find(&self, kind: ElementKind, id: &str) -> Option<&str> {
        self.elements
            .iter()
            .find(|e| e.kind == kind && e.id == id)
            .map(|e| e.content.as_str())
    }

    fn push(&mut self, kind: ElementKind, id: &str, content: &str) -> usize {
        self.elements.push(Element {
            kind,
            id: id.to_string(),
            content: content.to_string(),
        });
        self.elements.len() - 1
    }
}

impl StyleHost for MemoryDocument {
    type Handle = usize;

    fn create_style(&mut self, id: &str, css: &str) -> usize {
        self.push(ElementKind::Style, id, css)
    }

    fn set_style_text(&mut self, handle: &usize, css: &str) {
        if let Some(element) = self.elements.get_mut(*handle) {
            element.content = css.to_string();
        }
    }

    fn create_link(&mut self, id: &str, href: &str) -> usize {
        self.push(ElementKind::Link, id, href)
    }

    fn set_link_href(&mut self, handle: &usize, href: &str) {
        if let Some(element) = self.elements.get_mut(*handle) {
            element.content = href.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_creates_then_replaces() {
        let mut sink = LiveSink::new(MemoryDocument::new());
        sink.apply("accent_color", "a{color:red;}");
        sink.apply("accent_color", "a{color:blue;}");
        sink.apply("sidebar_width", "#secondary{width:30%;}");

        let doc = sink.host();
        assert_eq!(doc.count("prisma-core-dynamic-accent_color"), 1);
        assert_eq!(doc.style_text("prisma-core-dynamic-accent_color"), Some("a{color:blue;}"));
        assert_eq!(
            doc.style_ids().collect::<Vec<_>>(),
            vec!["prisma-core-dynamic-accent_color", "prisma-core-dynamic-sidebar_width"]
        );
    }

    #[test]
    fn test_reserved_elements_keep_their_order() {
        let mut sink = LiveSink::new(MemoryDocument::new());
        sink.reserve("accent_color");
        sink.reserve("top_bar_text_color");
        sink.apply("top_bar_text_color", "b{color:red;}");
        sink.apply("accent_color", "a{color:blue;}");
        sink.reserve("accent_color");

        let doc = sink.host();
        assert_eq!(doc.count("prisma-core-dynamic-accent_color"), 1);
        assert_eq!(doc.css(), "a{color:blue;}\nb{color:red;}");
    }

    #[test]
    fn test_empty_css_keeps_element() {
        let mut sink = LiveSink::new(MemoryDocument::new());
        sink.apply("footer_background", "#colophon{background:#000;}");
        sink.apply("footer_background", "");
        let doc = sink.into_host();
        assert_eq!(doc.style_text("prisma-core-dynamic-footer_background"), Some(""));
        assert_eq!(doc.css(), "");
    }

    #[test]
    fn test_links_are_not_duplicated() {
        let mut sink = LiveSink::new(MemoryDocument::new());
        sink.apply_link("google-font-open-sans", "https://fonts.googleapis.com/css?family=Open+Sans");
        sink.apply_link("google-font-open-sans", "https://fonts.googleapis.com/css?family=Open+Sans:700");
        let doc = sink.host();
        assert_eq!(doc.count("google-font-open-sans"), 1);
        assert_eq!(
            doc.link_href("google-font-open-sans"),
            Some("https://fonts.googleapis.com/css?family=Open+Sans:700")
        );
        assert_eq!(doc.style_text("google-font-open-sans"), None);
    }

    #[test]
    fn test_to_html() {
        let mut sink = LiveSink::new(MemoryDocument::new());
        sink.apply("hero_hover_slider_height", "#hero{height:500px;}");
        sink.apply_link("google-font-lato", "https://x/css?family=Lato");
        assert_eq!(
            sink.host().to_html(),
            "<style id=\"prisma-core-dynamic-hero_hover_slider_height\">#hero{height:500px;}</style>\n\
             <link rel=\"stylesheet\" id=\"google-font-lato\" href=\"https://x/css?family=Lato\" media=\"all\" />\n"
        );
    }
}
