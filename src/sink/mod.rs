//! Output sinks: where assembled CSS goes.
//!
//! - [`CacheSink`] persists the full stylesheet to one file and falls back to
//!   inline output when the file cannot be written.
//! - [`LiveSink`] patches one style element per owner key in a preview
//!   document supplied by a [`StyleHost`].

mod cache;
mod live;

pub use cache::{CacheEvent, CacheSink, Emission, INLINE_STYLE_ID};
pub use live::{LiveSink, MemoryDocument, StyleHost, STYLE_ID_PREFIX};
