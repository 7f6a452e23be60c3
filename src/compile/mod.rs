//! Field compilers: one function per option type, each turning
//! `(selector, property, value)` into a CSS fragment.
//!
//! Compilers are pure. They read only their arguments and the shared
//! [`Context`], and they never fail: a value that is missing, not an object
//! where one is expected, or otherwise unusable yields an empty fragment.
//! The only side channel is [`FontLoads`](crate::fonts::FontLoads), which the
//! typography compiler appends hosted font requests to.
//!
//! Fragments are emitted unminified; the persistent sink minifies the whole
//! stylesheet once.
//!
//! | Compiler | Option kind |
//! |---|---|
//! | [`spacing`] | `spacing` |
//! | [`range`] | `range` |
//! | [`typography`] | `typography` |
//! | [`design`] | `background`, `color-group`, `border` |

mod design;
mod media;
mod range;
mod spacing;
mod typography;

pub use design::{design, DesignKind, BORDER_STYLES};
pub use media::{wrap, Tier};
pub use range::range;
pub use spacing::spacing;
pub use typography::typography;

use crate::config::{Breakpoints, EngineConfig};
use crate::fonts::FontCatalog;

/// Settings shared by every compiler call in a generation pass.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub breakpoints: Breakpoints,
    pub fonts: &'a FontCatalog,
    /// Emit `-webkit-`/`-o-` gradient copies.
    pub legacy_gradient_prefixes: bool,
}

impl Context<'static> {
    /// A context using the built-in font catalog.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            breakpoints: config.breakpoints,
            fonts: FontCatalog::builtin(),
            legacy_gradient_prefixes: config.legacy_gradient_prefixes,
        }
    }
}

impl Default for Context<'static> {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}
