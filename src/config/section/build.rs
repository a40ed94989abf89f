//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! content = "docs"               # Content root (relative to config file)
//! extensions = ["md"]            # Document file extensions
//! exclude = ["node_modules"]     # Directory names never scanned
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Content directory. Normalized to an absolute path on load.
    pub content: PathBuf,

    /// File extensions (without dot) that count as documents.
    pub extensions: Vec<String>,

    /// Directory names skipped while scanning. Dot-directories are always skipped.
    pub exclude: Vec<String>,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            content: PathBuf::from("."),
            extensions: vec!["md".into()],
            exclude: vec!["node_modules".into()],
        }
    }
}

impl BuildSectionConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let build = FieldPath::new("build");

        if self.extensions.is_empty() {
            diag.error_with_hint(
                build.field("extensions"),
                "no document extensions configured",
                "extensions = [\"md\"]",
            );
        }
        for (i, ext) in self.extensions.iter().enumerate() {
            if ext.starts_with('.') {
                diag.error_with_hint(
                    build.field("extensions").index(i),
                    format!("extension `{ext}` must not start with a dot"),
                    format!("use \"{}\"", ext.trim_start_matches('.')),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let mut diag = ConfigDiagnostics::new();
        BuildSectionConfig::default().validate(&mut diag);
        assert!(diag.is_clean());
    }

    #[test]
    fn test_bad_extensions() {
        let build = BuildSectionConfig {
            extensions: vec![".md".into()],
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        build.validate(&mut diag);
        let fields: Vec<_> = diag.errors().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["build.extensions[0]"]);

        let build = BuildSectionConfig {
            extensions: Vec::new(),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        build.validate(&mut diag);
        assert_eq!(diag.error_count(), 1);
    }
}
