//! The persisted stylesheet file and its inline fallback.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use tracing::{debug, warn};

use crate::assemble::Stylesheet;
use crate::config::EngineConfig;
use crate::error::StyleError;

/// Element id of the inline `<style>` fallback.
pub const INLINE_STYLE_ID: &str = "prisma-core-dynamic-styles";

/// Lifecycle events that touch the cache file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheEvent {
    /// Style options were saved.
    OptionsSaved,
    /// An explicit rebuild was requested.
    Rebuild,
    /// The theme was activated.
    Activated,
    /// The theme was deactivated or reset; the file is removed.
    Deactivated,
}

/// How the stylesheet reaches the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emission {
    /// Written to disk; pages link to `url?ver=version`.
    Cached {
        path: PathBuf,
        url: String,
        /// File modification time, in seconds since the epoch.
        version: u64,
    },
    /// Not cached; the unminified stylesheet is printed inline.
    Inline(String),
}

impl Emission {
    pub fn is_cached(&self) -> bool {
        matches!(self, Emission::Cached { .. })
    }

    /// The HTML that loads this stylesheet.
    pub fn to_html(&self) -> String {
        match self {
            Emission::Cached { url, version, .. } => link_tag(url, *version),
            Emission::Inline(css) => format!("<style id=\"{INLINE_STYLE_ID}\">{css}</style>"),
        }
    }
}

fn link_tag(url: &str, version: u64) -> String {
    format!("<link rel=\"stylesheet\" id=\"{INLINE_STYLE_ID}-css\" href=\"{url}?ver={version}\" media=\"all\" />")
}

/// Writes the stylesheet to a single file at a fixed path.
///
/// Writability of the cache directory is checked once, at construction.
/// When the directory cannot be created, or a later write fails, the sink
/// degrades to [`Emission::Inline`] and never returns an error.
///
/// ```rust,no_run
/// use prisma_styles::sink::{CacheEvent, CacheSink};
/// use prisma_styles::{EngineConfig, MemoryStore, StyleAssembler};
///
/// let config = EngineConfig::default();
/// let assembler = StyleAssembler::new(config.clone()).unwrap();
/// let sink = CacheSink::new(&config);
///
/// let store = MemoryStore::new();
/// let emission = sink.on_event(CacheEvent::OptionsSaved, || assembler.build(&store));
/// println!("{}", emission.map(|e| e.to_html()).unwrap_or_default());
/// ```
#[derive(Debug, Clone)]
pub struct CacheSink {
    path: PathBuf,
    url: String,
    minify: bool,
    writable: bool,
}

impl CacheSink {
    pub fn new(config: &EngineConfig) -> Self {
        let writable = match fs::create_dir_all(&config.cache.dir) {
            Ok(()) => true,
            Err(err) => {
                warn!(dir = %config.cache.dir.display(), error = %err, "cache directory is not writable, styles will be inlined");
                false
            }
        };
        Self {
            path: config.cache.path(),
            url: config.cache.url(),
            minify: config.minify,
            writable,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_writable(&self) -> bool {
        self.writable
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Modification time of the cache file, if it exists.
    pub fn version(&self) -> Option<u64> {
        let modified = fs::metadata(&self.path).ok()?.modified().ok()?;
        Some(modified.duration_since(UNIX_EPOCH).ok()?.as_secs())
    }

    /// Writes `sheet` to the cache file, minified when configured.
    ///
    /// On failure the stale file is removed (best effort) and the unminified
    /// stylesheet is returned for inline emission.
    pub fn rebuild(&self, sheet: &Stylesheet) -> Emission {
        if !self.writable {
            return Emission::Inline(sheet.css.clone());
        }
        let css = if self.minify { sheet.minified() } else { sheet.css.clone() };
        match self.write(&css) {
            Ok(emission) => emission,
            Err(err) => {
                warn!(error = %err, "failed to write cached stylesheet, falling back to inline styles");
                let _ = fs::remove_file(&self.path);
                Emission::Inline(sheet.css.clone())
            }
        }
    }

    fn write(&self, css: &str) -> Result<Emission, StyleError> {
        fs::write(&self.path, css).map_err(|e| StyleError::io(&self.path, e))?;
        let version = self.version().unwrap_or_default();
        debug!(path = %self.path.display(), bytes = css.len(), version, "cached stylesheet written");
        Ok(Emission::Cached {
            path: self.path.clone(),
            url: self.url.clone(),
            version,
        })
    }

    /// Returns the cached file, building and writing it first if it is missing.
    pub fn ensure(&self, build: impl FnOnce() -> Stylesheet) -> Emission {
        match self.version() {
            Some(version) if self.writable => Emission::Cached {
                path: self.path.clone(),
                url: self.url.clone(),
                version,
            },
            _ => self.rebuild(&build()),
        }
    }

    /// Removes the cache file. Returns `false` when there was nothing to remove.
    pub fn delete(&self) -> Result<bool, StyleError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "cached stylesheet deleted");
                Ok(true)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(StyleError::io(&self.path, err)),
        }
    }

    /// Reacts to a lifecycle event.
    ///
    /// Saves, rebuild requests and activation rebuild the file; deactivation
    /// deletes it and returns `None`.
    pub fn on_event(&self, event: CacheEvent, build: impl FnOnce() -> Stylesheet) -> Option<Emission> {
        debug!(?event, "cache event");
        match event {
            CacheEvent::OptionsSaved | CacheEvent::Rebuild | CacheEvent::Activated => {
                Some(self.rebuild(&build()))
            }
            CacheEvent::Deactivated => {
                if let Err(err) = self.delete() {
                    warn!(error = %err, "failed to delete cached stylesheet");
                }
                None
            }
        }
    }

    /// The `<link>` tag for the cached file, with its mtime as cache buster.
    ///
    /// `None` when the file does not exist.
    pub fn stylesheet_link(&self) -> Option<String> {
        self.version().map(|version| link_tag(&self.url, version))
    }
}
