//! Font family resolution and hosted font loading.
//!
//! Typography options name a font family. The [`FontCatalog`] turns that name
//! into a CSS `font-family` value:
//!
//! - `default` resolves to the system UI stack,
//! - standard (locally installed) fonts resolve to their fallback stack,
//! - everything else resolves to the quoted family name.
//!
//! Hosted fonts must additionally be loaded by the page. Each typography
//! compile records a request in [`FontLoads`], which merges requests per
//! family so every family is loaded at most once per generation pass.

use std::collections::{BTreeSet, HashMap, HashSet};

use once_cell::sync::Lazy;
use serde::Serialize;

const SYSTEM_STACK: &str = "-apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, Oxygen-Sans, Ubuntu, Cantarell, \"Helvetica Neue\", sans-serif";

static BUILTIN: Lazy<FontCatalog> = Lazy::new(|| {
    let standard = [
        ("Arial", "Arial, Helvetica, sans-serif"),
        ("Courier New", "\"Courier New\", Courier, monospace"),
        ("Georgia", "Georgia, serif"),
        ("Helvetica", "Helvetica, Arial, sans-serif"),
        ("Lucida Sans Unicode", "\"Lucida Sans Unicode\", \"Lucida Grande\", sans-serif"),
        ("Monaco", "Monaco, Consolas, \"Lucida Console\", monospace"),
        ("Palatino Linotype", "\"Palatino Linotype\", \"Book Antiqua\", Palatino, serif"),
        ("Tahoma", "Tahoma, Geneva, sans-serif"),
        ("Times New Roman", "\"Times New Roman\", Times, serif"),
        ("Trebuchet MS", "\"Trebuchet MS\", Helvetica, sans-serif"),
        ("Verdana", "Verdana, Geneva, sans-serif"),
    ];
    let hosted = [
        "Fira Sans",
        "Inter",
        "Lato",
        "Lora",
        "Merriweather",
        "Montserrat",
        "Mulish",
        "Noto Sans",
        "Nunito",
        "Open Sans",
        "Oswald",
        "Playfair Display",
        "Poppins",
        "PT Sans",
        "Raleway",
        "Roboto",
        "Rubik",
        "Source Sans Pro",
        "Ubuntu",
        "Work Sans",
    ];

    let mut catalog = FontCatalog::new();
    for (name, stack) in standard {
        catalog = catalog.with_standard(name, stack);
    }
    for name in hosted {
        catalog = catalog.with_hosted(name);
    }
    catalog
});

/// Known font families and how they resolve.
#[derive(Debug, Clone)]
pub struct FontCatalog {
    default_stack: String,
    standard: HashMap<String, String>,
    hosted: HashSet<String>,
}

impl Default for FontCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl FontCatalog {
    /// An empty catalog whose `default` family is the system UI stack.
    pub fn new() -> Self {
        Self {
            default_stack: SYSTEM_STACK.to_string(),
            standard: HashMap::new(),
            hosted: HashSet::new(),
        }
    }

    /// The theme's built-in catalog.
    pub fn builtin() -> &'static FontCatalog {
        &BUILTIN
    }

    /// Registers a locally available font with its fallback stack.
    pub fn with_standard(mut self, name: &str, stack: &str) -> Self {
        self.standard.insert(name.to_string(), stack.to_string());
        self
    }

    /// Registers a font served by the hosted font service.
    pub fn with_hosted(mut self, name: &str) -> Self {
        self.hosted.insert(name.to_string());
        self
    }

    pub fn is_hosted(&self, family: &str) -> bool {
        self.hosted.contains(family)
    }

    /// Resolves a family name to a CSS `font-family` value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prisma_styles::fonts::FontCatalog;
    ///
    /// let catalog = FontCatalog::builtin();
    /// assert_eq!(catalog.resolve("Georgia"), "Georgia, serif");
    /// assert_eq!(catalog.resolve("Open Sans"), "\"Open Sans\"");
    /// assert!(catalog.resolve("default").ends_with("sans-serif"));
    /// ```
    pub fn resolve(&self, family: &str) -> String {
        let family = family.trim();
        if family.eq_ignore_ascii_case("default") {
            return self.default_stack.clone();
        }
        match self.standard.get(family) {
            Some(stack) => stack.clone(),
            None => format!("\"{}\"", family.trim_matches('"')),
        }
    }
}

/// One hosted font family to load, with everything requested for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontRequest {
    pub family: String,
    pub weights: BTreeSet<String>,
    pub styles: BTreeSet<String>,
    pub subsets: BTreeSet<String>,
}

impl FontRequest {
    fn new(family: &str) -> Self {
        Self {
            family: family.to_string(),
            weights: BTreeSet::new(),
            styles: BTreeSet::new(),
            subsets: BTreeSet::new(),
        }
    }

    /// Element id used for the font's `<link>` tag, e.g. `google-font-open-sans`.
    pub fn id(&self) -> String {
        let slug: Vec<String> = self
            .family
            .split_whitespace()
            .map(|w| w.to_ascii_lowercase())
            .collect();
        format!("google-font-{}", slug.join("-"))
    }

    /// Adds another request's weights, styles and subsets to this one.
    pub fn merge(&mut self, other: &FontRequest) {
        self.weights.extend(other.weights.iter().cloned());
        self.styles.extend(other.styles.iter().cloned());
        self.subsets.extend(other.subsets.iter().cloned());
    }

    /// The `family` parameter of the hosted font URL, e.g. `Open+Sans:400,700i`.
    fn family_param(&self, default_weights: &[String]) -> String {
        let weights: Vec<String> = if self.weights.is_empty() {
            default_weights.to_vec()
        } else {
            self.weights.iter().cloned().collect()
        };

        let mut variants: Vec<String> = weights.clone();
        if self.styles.contains("italic") {
            variants.extend(weights.iter().map(|w| format!("{w}i")));
        }

        let name = self.family.replace(' ', "+");
        if variants.is_empty() {
            name
        } else {
            format!("{}:{}", name, variants.join(","))
        }
    }
}

/// Font requests collected during one generation pass.
///
/// Requests are merged per family and kept in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontLoads {
    requests: Vec<FontRequest>,
}

impl FontLoads {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a request for `family`. Returns `true` the first time the
    /// family is seen; later calls only merge in new weights, styles or
    /// subsets.
    pub fn request(
        &mut self,
        family: &str,
        weight: Option<&str>,
        style: Option<&str>,
        subsets: &[String],
    ) -> bool {
        let mut incoming = FontRequest::new(family);
        incoming.weights.extend(weight.map(str::to_string));
        incoming.styles.extend(style.map(str::to_string));
        incoming.subsets.extend(subsets.iter().cloned());
        self.add(incoming)
    }

    /// Adds a whole request, merging with an existing one for the same family.
    pub fn add(&mut self, request: FontRequest) -> bool {
        match self.requests.iter_mut().find(|r| r.family == request.family) {
            Some(existing) => {
                existing.merge(&request);
                false
            }
            None => {
                tracing::trace!(family = %request.family, "hosted font requested");
                self.requests.push(request);
                true
            }
        }
    }

    /// Merges every request of `other` into this collection.
    pub fn extend(&mut self, other: FontLoads) {
        for request in other.requests {
            self.add(request);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FontRequest> {
        self.requests.iter()
    }

    pub fn into_vec(self) -> Vec<FontRequest> {
        self.requests
    }
}

/// Builds the stylesheet URL of the hosted font service for `requests`.
///
/// Returns `None` when there is nothing to load.
///
/// # Example
///
/// ```rust
/// use prisma_styles::fonts::{hosted_fonts_url, FontLoads};
///
/// let mut loads = FontLoads::new();
/// loads.request("Open Sans", Some("600"), None, &["latin-ext".to_string()]);
/// let url = hosted_fonts_url("https://fonts.googleapis.com", loads.iter(), &[]).unwrap();
/// assert_eq!(url, "https://fonts.googleapis.com/css?family=Open+Sans:600&subset=latin-ext");
/// ```
pub fn hosted_fonts_url<'a>(
    base: &str,
    requests: impl IntoIterator<Item = &'a FontRequest>,
    default_weights: &[String],
) -> Option<String> {
    let mut families = Vec::new();
    let mut subsets = BTreeSet::new();
    for request in requests {
        families.push(request.family_param(default_weights));
        subsets.extend(request.subsets.iter().cloned());
    }
    if families.is_empty() {
        return None;
    }

    let mut url = format!(
        "{}/css?family={}",
        base.trim_end_matches('/'),
        families.join("|")
    );
    if !subsets.is_empty() {
        url.push_str("&subset=");
        url.push_str(&subsets.into_iter().collect::<Vec<_>>().join(","));
    }
    Some(url)
}
