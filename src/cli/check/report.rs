//! Check report types and formatting.

use std::fmt;

use owo_colors::OwoColorize;

use crate::index::{ValidationError, ValidationErrors};
use crate::utils::{plural_count, plural_s};

/// Validation errors grouped for display
///
/// Sidebar errors are grouped by section key in first-seen order, so the
/// report reads top-to-bottom like the config file.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Errors per sidebar section.
    pub sections: Vec<(String, Vec<ValidationError>)>,
    /// Section-independent errors (nav bar, repeated section keys).
    pub site: Vec<ValidationError>,
}

impl CheckReport {
    pub fn from_errors(errors: ValidationErrors) -> Self {
        let mut report = Self::default();
        for error in errors {
            report.add(error);
        }
        report
    }

    fn add(&mut self, error: ValidationError) {
        let Some(key) = error.location().map(|l| l.section.clone()) else {
            self.site.push(error);
            return;
        };
        match self.sections.iter_mut().find(|(k, _)| *k == key) {
            Some((_, errs)) => errs.push(error),
            None => self.sections.push((key, vec![error])),
        }
    }

    /// Total error count.
    pub fn error_count(&self) -> usize {
        self.site.len() + self.sections.iter().map(|(_, v)| v.len()).sum::<usize>()
    }

    /// Count of missing or ambiguous links.
    pub fn link_error_count(&self) -> usize {
        self.iter().filter(|e| e.is_link_error()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.error_count() == 0
    }

    fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.site
            .iter()
            .chain(self.sections.iter().flat_map(|(_, v)| v))
    }

    /// Print the full report to stderr (site -> sections).
    pub fn print(&self) {
        if !self.site.is_empty() {
            eprintln!();
            eprintln!(
                "{} {}",
                "site".red().bold(),
                format!("({} error{})", self.site.len(), plural_s(self.site.len())).dimmed()
            );
            for e in &self.site {
                eprintln!("{e}");
            }
        }

        for (key, errs) in &self.sections {
            eprintln!();
            eprintln!(
                "{}{}{} {}",
                "[".dimmed(),
                key.cyan(),
                "]".dimmed(),
                format!("({} error{})", errs.len(), plural_s(errs.len())).dimmed()
            );
            for e in errs {
                eprintln!("{e}");
            }
        }
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.error_count();
        if total == 0 {
            return write!(f, "{}", "all checks passed".green());
        }
        write!(f, "{} {}", "found".dimmed(), plural_count(total, "error").red().bold())?;
        let links = self.link_error_count();
        if links > 0 {
            write!(f, " {}", format!("({})", plural_count(links, "broken link")).dimmed())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Location;

    fn dangling(section: &str, position: usize) -> ValidationError {
        ValidationError::DanglingReference {
            location: Location::new(section, "G", 0, position),
            target: "x".to_string(),
        }
    }

    #[test]
    fn test_group_by_section_in_order() {
        let errors: ValidationErrors = vec![
            dangling("/posts/", 0),
            ValidationError::DuplicateSection {
                key: "/posts/".to_string(),
                first: 0,
                second: 3,
            },
            dangling("/os-notes/", 1),
            dangling("/posts/", 2),
        ]
        .into_iter()
        .collect();

        let report = CheckReport::from_errors(errors);
        let keys: Vec<_> = report.sections.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["/posts/", "/os-notes/"]);
        assert_eq!(report.sections[0].1.len(), 2);
        assert_eq!(report.site.len(), 1);
        assert_eq!(report.error_count(), 4);
        assert_eq!(report.link_error_count(), 3);
        let summary = report.to_string();
        assert!(summary.contains("4 errors"));
        assert!(summary.contains("3 broken links"));
    }

    #[test]
    fn test_empty_report() {
        let report = CheckReport::from_errors(ValidationErrors::new());
        assert!(report.is_empty());
        assert!(report.to_string().contains("all checks passed"));
    }
}
