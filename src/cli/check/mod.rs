//! Navigation check command.

mod report;

use anyhow::Result;

use super::common::{build_index, collect_documents};
use crate::config::{SiteConfig, ValidateLevel};
use crate::content::KnownDocuments;
use crate::index::{ValidationErrors, check_nav};
use crate::{debug, log};
use crate::utils::{plural_count, plural_s};

pub use report::CheckReport;

/// Validate sidebar and nav links against the content documents
pub fn check_site(config: &SiteConfig) -> Result<()> {
    let docs = collect_documents(config)?;
    let report = run_checks(config, &docs);

    report.print();
    if !report.is_empty() {
        eprintln!();
    }
    log!("check"; "{}", report);

    outcome(&report, config.validate.level)
}

/// Exit status for a finished check: failures only count at `error` level.
fn outcome(report: &CheckReport, level: ValidateLevel) -> Result<()> {
    let count = report.error_count();
    if count > 0 && level.is_error() {
        anyhow::bail!("validation failed: {} error{}", count, plural_s(count));
    }
    Ok(())
}

/// Run every enabled check and group the results.
pub fn run_checks(config: &SiteConfig, docs: &KnownDocuments) -> CheckReport {
    let specs = config.sidebar_specs();
    let links: usize = specs
        .iter()
        .flat_map(|s| &s.groups)
        .map(|g| g.entries.len())
        .sum();
    log!(
        "check";
        "checking {} in {} against {}",
        plural_count(links, "sidebar link"),
        plural_count(specs.len(), "section"),
        plural_count(docs.len(), "document")
    );

    let mut errors = ValidationErrors::new();
    match build_index(config, docs) {
        Ok(index) => {
            log!("ok"; "sidebar index built ({})", plural_count(index.entry_count(), "link"));
            for section in index.sections() {
                for group in section.groups() {
                    for entry in group.entries() {
                        debug!(
                            "check";
                            "{} > {}: {} -> {}",
                            section.key(),
                            group.text(),
                            entry.link(),
                            entry.doc()
                        );
                    }
                }
            }
        }
        Err(e) => errors.extend(e),
    }

    if config.validate.nav {
        errors.extend(check_nav(&config.site.nav, docs));
    }

    CheckReport::from_errors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::fs;
    use tempfile::TempDir;

    const SITE: &str = r#"
[[site.nav]]
text = "OS Notes"
link = "/os-notes/introduction"

[[sidebar]]
prefix = "/os-notes/"
text = "OS Notes"
items = [
    { text = "Introduction", link = "/os-notes/introduction" },
    { text = "Deadlock", link = "/os-notes/deadlock" },
]
"#;

    #[test]
    fn test_checks_pass() {
        let config = test_parse_config(SITE);
        let docs: KnownDocuments = ["/os-notes/introduction", "/os-notes/deadlock"]
            .into_iter()
            .collect();
        assert!(run_checks(&config, &docs).is_empty());
    }

    #[test]
    fn test_checks_report_sidebar_and_nav() {
        let config = test_parse_config(SITE);
        let docs: KnownDocuments = ["/os-notes/deadlock"].into_iter().collect();
        let report = run_checks(&config, &docs);
        assert_eq!(report.site.len(), 1);
        assert_eq!(report.sections.len(), 1);
        assert_eq!(report.error_count(), 2);
    }

    #[test]
    fn test_nav_check_can_be_disabled() {
        let mut config = test_parse_config(SITE);
        config.validate.nav = false;
        let docs: KnownDocuments = ["/os-notes/deadlock"].into_iter().collect();
        let report = run_checks(&config, &docs);
        assert!(report.site.is_empty());
        assert_eq!(report.error_count(), 1);
    }

    #[test]
    fn test_outcome_respects_level() {
        let config = test_parse_config(SITE);
        let docs: KnownDocuments = ["/os-notes/deadlock"].into_iter().collect();
        let report = run_checks(&config, &docs);

        let err = outcome(&report, ValidateLevel::Error).unwrap_err();
        assert!(err.to_string().contains("2 errors"));
        assert!(outcome(&report, ValidateLevel::Warn).is_ok());

        let clean = CheckReport::from_errors(ValidationErrors::new());
        assert!(outcome(&clean, ValidateLevel::Error).is_ok());
    }

    /// Site with `index.md` and `os-notes/introduction.md` on disk.
    fn content_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.md"), "# Me\n").unwrap();
        fs::create_dir(dir.path().join("os-notes")).unwrap();
        fs::write(dir.path().join("os-notes/introduction.md"), "# Intro\n").unwrap();
        dir
    }

    #[test]
    fn test_check_site_fails_on_dangling_entry() {
        let dir = content_dir();
        let mut config = test_parse_config(SITE);
        config.build.content = dir.path().to_path_buf();

        let err = check_site(&config).unwrap_err();
        assert!(err.to_string().contains("1 error"));

        config.validate.level = ValidateLevel::Warn;
        assert!(check_site(&config).is_ok());
    }

    #[test]
    fn test_check_site_passes_when_every_link_resolves() {
        let dir = content_dir();
        fs::write(dir.path().join("os-notes/deadlock.md"), "# Deadlock\n").unwrap();
        let mut config = test_parse_config(SITE);
        config.build.content = dir.path().to_path_buf();

        assert!(check_site(&config).is_ok());
    }
}
