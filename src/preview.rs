//! Incremental restyling of a live preview document.
//!
//! A [`PreviewSession`] holds the pending option values of a preview, the
//! assembler and a [`LiveSink`]. Every option change re-renders only the
//! style elements whose rules depend on that option, through the same rule
//! table the full build uses.
//!
//! The session reserves one empty style element per slot of the table when
//! it starts, so the document's elements follow table order and the patched
//! document cascades exactly like the batch stylesheet.
//!
//! ```rust
//! use prisma_styles::preview::PreviewSession;
//! use prisma_styles::sink::MemoryDocument;
//! use prisma_styles::{EngineConfig, MemoryStore, StyleAssembler};
//! use serde_json::json;
//!
//! let assembler = StyleAssembler::new(EngineConfig::default()).unwrap();
//! let mut session = PreviewSession::new(&assembler, MemoryStore::new(), MemoryDocument::new());
//!
//! let touched = session.on_change("sidebar_width", json!(20));
//! assert_eq!(touched, vec!["sidebar_width"]);
//!
//! let css = session.document().style_text("prisma-core-dynamic-sidebar_width").unwrap();
//! assert!(css.contains("max-width: 80%;"));
//! ```

use serde_json::Value;
use tracing::{debug, warn};

use crate::assemble::{StyleAssembler, Stylesheet};
use crate::fonts::hosted_fonts_url;
use crate::sink::{LiveSink, StyleHost};
use crate::store::MemoryStore;

pub struct PreviewSession<'a, H: StyleHost> {
    assembler: &'a StyleAssembler,
    store: MemoryStore,
    sink: LiveSink<H>,
}

impl<'a, H: StyleHost> PreviewSession<'a, H> {
    pub fn new(assembler: &'a StyleAssembler, store: MemoryStore, host: H) -> Self {
        let mut sink = LiveSink::new(host);
        for slot in assembler.slots() {
            sink.reserve(slot);
        }
        Self { assembler, store, sink }
    }

    /// Writes every style element of the rule table.
    pub fn render_all(&mut self) {
        let assembler = self.assembler;
        for slot in assembler.slots() {
            let sheet = assembler.build_slot(&self.store, slot);
            self.patch(slot, &sheet);
        }
    }

    /// Stores a changed option value and re-renders the style elements that
    /// depend on it. Returns the ids of the re-rendered elements.
    ///
    /// Values of unexpected shape are stored as given and resolve to the
    /// option's default when read.
    pub fn on_change(&mut self, key: &str, value: Value) -> Vec<String> {
        self.store.set(key, value);

        let assembler = self.assembler;
        let slots = assembler.slots_reading(key);
        if slots.is_empty() && !assembler.schema().contains(key) {
            warn!(key, "preview change for unknown option");
        }
        debug!(key, slots = slots.len(), "preview restyle");

        for slot in &slots {
            let sheet = assembler.build_slot(&self.store, slot);
            self.patch(slot, &sheet);
        }
        slots.into_iter().map(str::to_string).collect()
    }

    fn patch(&mut self, slot: &str, sheet: &Stylesheet) {
        self.sink.apply(slot, &sheet.css);

        let fonts = &self.assembler.config().fonts;
        for request in &sheet.fonts {
            if let Some(href) = hosted_fonts_url(&fonts.hosted_url, [request], &fonts.weights) {
                self.sink.apply_link(&request.id(), &href);
            }
        }
    }

    /// The preview document.
    pub fn document(&self) -> &H {
        self.sink.host()
    }

    /// Option values of the preview so far.
    pub fn store(&self) -> &MemoryStore {
        &self.store
    }

    pub fn into_document(self) -> H {
        self.sink.into_host()
    }
}
