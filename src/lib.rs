//! # Prisma Styles
//!
//! Compiles theme customizer options into CSS.
//!
//! A theme exposes a few hundred design options: colours, spacing, font
//! settings, borders, backgrounds. This crate turns a set of stored option
//! values into the dynamic stylesheet that applies them, in two ways:
//!
//! - **Batch**: the whole stylesheet, minified and written to a cache file
//!   (or printed inline when the file cannot be written).
//! - **Incremental**: one `<style>` element per option, rewritten whenever
//!   that option changes in a live preview.
//!
//! Both paths run the same data-driven rule table through the same field
//! compilers, so they always produce the same CSS.
//!
//! ## Core concepts
//!
//! - [`schema::Schema`]: every option with its kind and default
//! - [`OptionsStore`]: the stored values; [`Options`] resolves them against the schema
//! - [`compile`]: field compilers (`spacing`, `range`, `typography`, `design`)
//! - [`rules::RuleSet`]: areas of the site, their gates and their rules
//! - [`StyleAssembler`]: runs the table, producing a [`Stylesheet`]
//! - [`sink`]: the cache file and live preview outputs
//! - [`editor`]: the block editor stylesheet
//!
//! ## Quick start
//!
//! ```rust
//! use prisma_styles::{EngineConfig, MemoryStore, StyleAssembler};
//! use serde_json::json;
//!
//! let assembler = StyleAssembler::new(EngineConfig::default()).unwrap();
//!
//! let mut store = MemoryStore::new();
//! store.set("accent_color", json!("#3857F1"));
//! store.set("top_bar_enable", json!(false));
//!
//! let sheet = assembler.build(&store);
//! assert!(sheet.css.contains("background-color: #5671f4;"));
//! assert!(!sheet.css.contains("#prisma-core-topbar"));
//! ```
//!
//! ## Failure model
//!
//! Generation never fails. Missing options use their schema default,
//! malformed values compile to nothing, invalid enumerated values are
//! dropped. Only construction ([`StyleAssembler::with_rules`],
//! [`EngineConfig::load`]) and explicit file operations return
//! [`StyleError`].

pub mod assemble;
pub mod color;
pub mod compile;
pub mod config;
pub mod editor;
pub mod error;
pub mod fonts;
pub mod inspect;
pub mod minify;
pub mod preview;
pub mod rules;
pub mod schema;
pub mod sink;
pub mod store;
pub mod value;

pub use assemble::{Fragment, StyleAssembler, Stylesheet};
pub use color::{hex2rgba, is_light_color, light_or_dark, luminance, Rgb};
pub use config::EngineConfig;
pub use error::StyleError;
pub use minify::minify;
pub use preview::PreviewSession;
pub use store::{MemoryStore, Options, OptionsStore};
pub use value::format_number;
