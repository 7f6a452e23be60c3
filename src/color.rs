//! Colour helpers used by derived values.
//!
//! Colours arrive as user input: `#3857F1`, `#fff`, `3857f1` or
//! `rgb(56, 87, 241)` / `rgba(...)`. Helpers that cannot parse their input
//! hand it back unchanged instead of failing.

use crate::value::format_number;

/// An sRGB triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parses a hex (`#abc`, `#aabbcc`, with or without `#`) or `rgb()`/`rgba()` colour.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prisma_styles::Rgb;
    ///
    /// assert_eq!(Rgb::parse("#03F"), Some(Rgb(0x00, 0x33, 0xff)));
    /// assert_eq!(Rgb::parse("rgba(10, 20, 30, 0.5)"), Some(Rgb(10, 20, 30)));
    /// assert_eq!(Rgb::parse("inherit"), None);
    /// ```
    pub fn parse(color: &str) -> Option<Rgb> {
        let color = color.trim();
        if color.starts_with("rgb") {
            return parse_rgb_function(color);
        }

        let hex = color.strip_prefix('#').unwrap_or(color);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 => hex.to_string(),
            _ => return None,
        };

        let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
        Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Lowercase `#rrggbb` notation.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Perceived brightness on a 0–255 scale.
    pub fn brightness(self) -> f64 {
        (f64::from(self.0) * 299.0 + f64::from(self.1) * 587.0 + f64::from(self.2) * 114.0)
            / 1000.0
    }
}

fn parse_rgb_function(color: &str) -> Option<Rgb> {
    let open = color.find('(')?;
    let close = color.rfind(')')?;
    let mut parts = color.get(open + 1..close)?.split(',').map(str::trim);

    let mut channel = || -> Option<u8> {
        let raw: f64 = parts.next()?.parse().ok()?;
        Some(raw.clamp(0.0, 255.0) as u8)
    };
    Some(Rgb(channel()?, channel()?, channel()?))
}

/// Converts a hex colour to `rgba(r,g,b,opacity)`.
///
/// Values already in `rgba` form pass through untouched; opacity above 1 is
/// clamped to 1. Unparseable colours are returned as given.
///
/// # Example
///
/// ```rust
/// use prisma_styles::hex2rgba;
///
/// assert_eq!(hex2rgba("#3857F1", 0.09), "rgba(56,87,241,0.09)");
/// assert_eq!(hex2rgba("#fff", 2.0), "rgba(255,255,255,1)");
/// ```
pub fn hex2rgba(color: &str, opacity: f64) -> String {
    if color.starts_with("rgba") {
        return color.to_string();
    }
    match Rgb::parse(color) {
        Some(Rgb(r, g, b)) => {
            let opacity = opacity.clamp(0.0, 1.0);
            format!("rgba({},{},{},{})", r, g, b, format_number(opacity))
        }
        None => color.to_string(),
    }
}

/// Lightens (positive `percent`) or darkens (negative `percent`) a colour.
///
/// Each channel moves `ceil(distance * percent)` towards white or black. The
/// result is lowercase `#rrggbb`; unparseable input is returned as given.
///
/// # Example
///
/// ```rust
/// use prisma_styles::luminance;
///
/// assert_eq!(luminance("#3857F1", 0.15), "#5671f4");
/// assert_eq!(luminance("#ffffff", -0.2), "#cccccc");
/// ```
pub fn luminance(color: &str, percent: f64) -> String {
    let Some(Rgb(r, g, b)) = Rgb::parse(color) else {
        return color.to_string();
    };

    let shift = |c: u8| -> u8 {
        let c = f64::from(c);
        let (from, to) = if percent < 0.0 { (0.0, c) } else { (c, 255.0) };
        (c + ((to - from) * percent).ceil()).clamp(0.0, 255.0) as u8
    };

    Rgb(shift(r), shift(g), shift(b)).to_hex()
}

/// Returns `true` when a colour's perceived brightness exceeds 137.
///
/// Unparseable colours count as dark.
pub fn is_light_color(color: &str) -> bool {
    Rgb::parse(color).is_some_and(|rgb| rgb.brightness() > 137.0)
}

/// Picks `dark` for light colours and `light` for dark ones.
///
/// Used to choose a foreground that contrasts with `color`.
pub fn light_or_dark<'a>(color: &str, dark: &'a str, light: &'a str) -> &'a str {
    if is_light_color(color) {
        dark
    } else {
        light
    }
}
