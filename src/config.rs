//! Engine configuration.
//!
//! Every field has a default, so an empty YAML document (or
//! [`EngineConfig::default`]) yields a working engine:
//!
//! ```yaml
//! breakpoints:
//!   tablet: 768
//!   mobile: 480
//! cache:
//!   dir: /var/www/uploads/prisma-core
//!   base_url: https://example.com/uploads/prisma-core
//! legacy_gradient_prefixes: false
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StyleError;

/// Top-level configuration for stylesheet generation and output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Responsive tier widths used by the media query wrappers.
    pub breakpoints: Breakpoints,
    /// Where the persisted stylesheet lives.
    pub cache: CacheConfig,
    /// Hosted font settings.
    pub fonts: FontConfig,
    /// Minify the persisted stylesheet.
    pub minify: bool,
    /// Emit `-webkit-` and `-o-` copies of every gradient declaration.
    pub legacy_gradient_prefixes: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            cache: CacheConfig::default(),
            fonts: FontConfig::default(),
            minify: true,
            legacy_gradient_prefixes: true,
        }
    }
}

impl EngineConfig {
    /// Parses a configuration from YAML. Missing fields take their defaults.
    pub fn from_yaml(source: &str) -> Result<Self, StyleError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(source)?)
    }

    /// Reads and parses a YAML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| StyleError::io(path, e))?;
        Self::from_yaml(&source)
    }
}

/// Maximum widths of the tablet and mobile tiers, in pixels.
///
/// Desktop is the unwrapped base tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    pub tablet: u32,
    pub mobile: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            tablet: 768,
            mobile: 480,
        }
    }
}

/// Location of the persisted stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Directory holding the stylesheet. Created on first write.
    pub dir: PathBuf,
    /// File name inside [`dir`](Self::dir).
    pub file_name: String,
    /// Public URL of [`dir`](Self::dir), used for `<link>` generation.
    pub base_url: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("uploads/prisma-core"),
            file_name: "dynamic-styles.css".to_string(),
            base_url: "/wp-content/uploads/prisma-core".to_string(),
        }
    }
}

impl CacheConfig {
    /// Full path of the stylesheet file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }

    /// Public URL of the stylesheet file.
    pub fn url(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), self.file_name)
    }
}

/// Hosted (remote) font settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Base URL of the hosted font service.
    pub hosted_url: String,
    /// Weights requested when a typography option does not pin one.
    pub weights: Vec<String>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            hosted_url: "https://fonts.googleapis.com".to_string(),
            weights: vec!["400".to_string(), "700".to_string()],
        }
    }
}
