//! Docs command: list known content documents.

use anyhow::Result;

use super::common::collect_documents;
use crate::config::SiteConfig;
use crate::log;
use crate::utils::plural_count;

pub fn list_docs(config: &SiteConfig) -> Result<()> {
    let docs = collect_documents(config)?;
    for id in docs.sorted() {
        println!("{id}");
    }
    log!("docs"; "{} in {}", plural_count(docs.len(), "document"), config.content_dir().display());
    Ok(())
}
