//! Common steps shared across CLI commands.

use anyhow::{Context, Result};

use super::check::CheckReport;
use crate::config::SiteConfig;
use crate::content::{KnownDocuments, scan_documents};
use crate::index::{ContentIndex, ValidationErrors};
use crate::utils::plural_count;
use crate::{debug, log};

/// Scan the configured content directory.
pub fn collect_documents(config: &SiteConfig) -> Result<KnownDocuments> {
    let root = config.content_dir();
    let docs = scan_documents(root, &config.scan_options())
        .with_context(|| format!("failed to scan `{}`", root.display()))?;

    debug!("scan"; "found {} in {}", plural_count(docs.len(), "document"), root.display());
    if docs.is_empty() {
        log!("warning"; "no documents found in {}", root.display());
    }
    Ok(docs)
}

/// Build the sidebar index from config using the configured duplicate policy.
pub fn build_index(
    config: &SiteConfig,
    docs: &KnownDocuments,
) -> Result<ContentIndex, ValidationErrors> {
    ContentIndex::build_with(&config.sidebar_specs(), docs, config.validate.duplicates)
}

/// Build the index for a command that cannot work on a broken sidebar.
///
/// Prints the grouped report and fails regardless of `validate.level`.
pub fn require_index(
    config: &SiteConfig,
    docs: &KnownDocuments,
    command: &str,
) -> Result<ContentIndex> {
    build_index(config, docs).map_err(|errors| {
        let report = CheckReport::from_errors(errors);
        report.print();
        anyhow::anyhow!("cannot {command}: {report}")
    })
}
