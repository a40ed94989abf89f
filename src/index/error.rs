//! Validation errors produced while building the content index.

use std::fmt;

use owo_colors::OwoColorize;
use thiserror::Error;

use super::model::Location;
use crate::content::DocId;
use crate::utils::plural_count;

// ============================================================================
// ValidationError
// ============================================================================

/// A single navigation configuration problem
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{location} {} `{target}` has no matching document", "→".red())]
    DanglingReference { location: Location, target: String },

    #[error(
        "{location} {} `{target}` matches {} documents: {}",
        "→".red(),
        .candidates.len(),
        join_ids(.candidates)
    )]
    AmbiguousReference {
        location: Location,
        target: String,
        candidates: Vec<DocId>,
    },

    #[error(
        "{} {} section `{key}` is declared twice (positions {first} and {second})",
        "sidebar".cyan(),
        "→".red()
    )]
    DuplicateSection {
        key: String,
        first: usize,
        second: usize,
    },

    #[error("{location} {} `{target}` already listed at {first}", "→".red())]
    DuplicateEntry {
        location: Location,
        target: String,
        first: Location,
    },

    #[error(
        "{} #{position} {} `{target}` ({text}) has no matching document",
        "nav".cyan(),
        "→".red()
    )]
    DanglingNavLink {
        position: usize,
        text: String,
        target: String,
    },
}

impl ValidationError {
    /// Entry coordinates, when the error points into the sidebar.
    pub fn location(&self) -> Option<&Location> {
        match self {
            Self::DanglingReference { location, .. }
            | Self::AmbiguousReference { location, .. }
            | Self::DuplicateEntry { location, .. } => Some(location),
            Self::DuplicateSection { .. } | Self::DanglingNavLink { .. } => None,
        }
    }

    /// Whether the error is a missing or ambiguous link (as opposed to a
    /// structural problem).
    pub fn is_link_error(&self) -> bool {
        matches!(
            self,
            Self::DanglingReference { .. }
                | Self::AmbiguousReference { .. }
                | Self::DanglingNavLink { .. }
        )
    }
}

fn join_ids(ids: &[DocId]) -> String {
    ids.iter()
        .map(DocId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// ValidationErrors
// ============================================================================

/// Every problem found in one pass, in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn extend(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    #[cfg(test)]
    pub fn as_slice(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "navigation validation failed:".red().bold())?;
        for (i, err) in self.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.len() {
                writeln!(f)?;
            }
        }
        if self.len() > 1 {
            write!(f, "\n\n{} {}", "found".dimmed(), plural_count(self.len(), "error").red())?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dangling_display_mentions_coordinates() {
        let err = ValidationError::DanglingReference {
            location: Location::new("notes", "Basics", 0, 1),
            target: "sched".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("notes"));
        assert!(display.contains("Basics"));
        assert!(display.contains("#1"));
        assert!(display.contains("`sched`"));
    }

    #[test]
    fn test_errors_display_counts() {
        let errors: ValidationErrors = (0..3)
            .map(|i| ValidationError::DanglingNavLink {
                position: i,
                text: "Posts".to_string(),
                target: "/posts/missing".to_string(),
            })
            .collect();
        let display = errors.to_string();
        assert!(display.contains("navigation validation failed"));
        assert!(display.contains("errors"));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ValidationErrors::new().into_result(7), Ok(7));

        let mut errors = ValidationErrors::new();
        errors.push(ValidationError::DuplicateSection {
            key: "/posts/".to_string(),
            first: 0,
            second: 2,
        });
        assert!(errors.clone().into_result(()).is_err());
        assert!(errors.iter().all(|e| e.location().is_none()));
        assert!(!errors.as_slice()[0].is_link_error());
    }
}
