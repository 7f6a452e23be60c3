//! Responsive tiers and their media query wrappers.

use crate::config::Breakpoints;

/// A responsive tier. Desktop is the unwrapped base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Desktop,
    Tablet,
    Mobile,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Desktop, Tier::Tablet, Tier::Mobile];

    /// Maps a stored tier key (`desktop`, `tablet`, `mobile`) to a tier.
    pub fn from_key(key: &str) -> Option<Tier> {
        match key {
            "desktop" => Some(Tier::Desktop),
            "tablet" => Some(Tier::Tablet),
            "mobile" => Some(Tier::Mobile),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Tier::Desktop => "desktop",
            Tier::Tablet => "tablet",
            Tier::Mobile => "mobile",
        }
    }

    /// Maximum viewport width of the tier, `None` for desktop.
    pub fn max_width(self, breakpoints: &Breakpoints) -> Option<u32> {
        match self {
            Tier::Desktop => None,
            Tier::Tablet => Some(breakpoints.tablet),
            Tier::Mobile => Some(breakpoints.mobile),
        }
    }
}

/// Wraps `block` in the tier's media query. Desktop blocks are returned as is.
///
/// ```rust
/// use prisma_styles::compile::{wrap, Tier};
/// use prisma_styles::config::Breakpoints;
///
/// let bp = Breakpoints::default();
/// assert_eq!(wrap(Tier::Desktop, &bp, "a{b: 1px; }"), "a{b: 1px; }");
/// assert_eq!(
///     wrap(Tier::Mobile, &bp, "a{b: 1px; }"),
///     "@media only screen and (max-width: 480px) {a{b: 1px; }}"
/// );
/// ```
pub fn wrap(tier: Tier, breakpoints: &Breakpoints, block: &str) -> String {
    match tier.max_width(breakpoints) {
        Some(width) => format!("@media only screen and (max-width: {width}px) {{{block}}}"),
        None => block.to_string(),
    }
}
