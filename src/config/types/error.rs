//! Config loading errors and field-level diagnostics.
//!
//! Loading fails fast (missing file, bad TOML). Field checks accumulate:
//! every section pushes its issues into one `ConfigDiagnostics`, which is
//! reported as a whole.

use std::fmt;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use super::FieldPath;
use crate::utils::plural_count;

/// Why `sitenav.toml` could not be turned into a `SiteConfig`
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config is not valid TOML")]
    Toml(#[from] toml::de::Error),

    #[error("no `{0}` in this directory or any parent; pass --config")]
    NotFound(PathBuf),

    // Rendered inline; a `source()` would print the issues twice.
    #[error("{0}")]
    Invalid(ConfigDiagnostics),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// One questionable or invalid config value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    /// Where the value lives, e.g. `sidebar[1].groups[0].items[3].link`.
    pub field: FieldPath,
    pub message: String,
    /// Replacement the user can paste back into the config.
    pub hint: Option<String>,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Error => write!(f, "{} {} {}", self.field, "→".red(), self.message)?,
            Severity::Warning => write!(f, "{} {} {}", self.field, "→".yellow(), self.message)?,
        }
        if let Some(hint) = &self.hint {
            write!(f, "\n    {} {}", "try:".dimmed(), hint)?;
        }
        Ok(())
    }
}

/// Issues collected across every config section, in check order
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    issues: Vec<ConfigIssue>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push(Severity::Error, field, message.into(), None);
    }

    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.push(Severity::Error, field, message.into(), Some(hint.into()));
    }

    /// Record a value that loads fine but is probably a mistake.
    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push(Severity::Warning, field, message.into(), None);
    }

    fn push(
        &mut self,
        severity: Severity,
        field: FieldPath,
        message: String,
        hint: Option<String>,
    ) {
        self.issues.push(ConfigIssue {
            severity,
            field,
            message,
            hint,
        });
    }

    pub fn errors(&self) -> impl Iterator<Item = &ConfigIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ConfigIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// No errors (warnings allowed).
    pub fn is_clean(&self) -> bool {
        self.error_count() == 0
    }

    pub fn print_warnings(&self) {
        let count = self.warnings().count();
        if count == 0 {
            return;
        }
        crate::log!("warning"; "{} in config:", plural_count(count, "questionable value"));
        for issue in self.warnings() {
            eprintln!("{issue}");
        }
    }

    pub fn into_result(self) -> Result<(), ConfigError> {
        if self.is_clean() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(self))
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            "invalid config".red().bold(),
            plural_count(self.error_count(), "error")
        )?;
        for issue in self.errors() {
            write!(f, "\n{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("sitenav.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        assert!(io_err.to_string().contains("sitenav.toml"));

        let not_found = ConfigError::NotFound(PathBuf::from("nav.toml"));
        assert!(not_found.to_string().contains("--config"));
    }

    #[test]
    fn test_errors_and_warnings_are_separate() {
        let sidebar = FieldPath::new("sidebar");
        let mut diag = ConfigDiagnostics::new();
        diag.warn(sidebar.index(1), "section has no entries");
        assert!(diag.is_clean());

        diag.error(FieldPath::new("site").field("title"), "must not be empty");
        diag.error_with_hint(
            sidebar.index(0).field("prefix"),
            "prefix `posts` must start and end with `/`",
            "prefix = \"/posts/\"",
        );

        assert_eq!(diag.error_count(), 2);
        assert_eq!(diag.warnings().count(), 1);
        let display = diag.to_string();
        assert!(display.contains("2 errors"));
        assert!(display.contains("sidebar[0].prefix"));
        assert!(display.contains("prefix = \"/posts/\""));
        // Warnings are printed separately, never as part of the failure
        assert!(!display.contains("no entries"));
    }

    #[test]
    fn test_into_result() {
        let mut diag = ConfigDiagnostics::new();
        diag.warn(FieldPath::new("sidebar").index(0), "group has no entries");
        assert!(diag.into_result().is_ok());

        let mut diag = ConfigDiagnostics::new();
        diag.error(FieldPath::new("build").field("extensions"), "empty");
        assert!(matches!(diag.into_result(), Err(ConfigError::Invalid(_))));
    }
}
