//! Error type for engine construction and cache file operations.
//!
//! Generation itself never fails: compilers and the assembler degrade to
//! empty fragments. Errors only surface when building an engine from
//! configuration or rule tables, or when touching the cache file.

use std::path::PathBuf;

/// Errors returned by configuration loading, rule compilation and cache I/O.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    /// A CSS block template failed to compile.
    #[error("invalid style template '{name}': {source}")]
    Template {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    /// A YAML document (config, options store, rule table) could not be parsed.
    #[error("invalid YAML document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON document could not be parsed or produced.
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading or writing a file failed.
    #[error("i/o error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An options store document did not have a mapping at its root.
    #[error("options store root must be a mapping, found {found}")]
    NotAMapping { found: &'static str },
}

impl StyleError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StyleError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display_names_path() {
        let err = StyleError::io(
            "/tmp/prisma/dynamic-styles.css",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/prisma/dynamic-styles.css"));
        assert!(msg.contains("read-only"));
    }

    #[test]
    fn test_not_a_mapping_display() {
        let err = StyleError::NotAMapping { found: "array" };
        assert_eq!(
            err.to_string(),
            "options store root must be a mapping, found array"
        );
    }
}
