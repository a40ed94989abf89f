//! Lookup command: where does the sidebar link to a document?

use anyhow::Result;
use owo_colors::OwoColorize;

use super::LookupArgs;
use super::common::{collect_documents, require_index};
use crate::config::SiteConfig;
use crate::content::{KnownDocuments, Resolution};
use crate::index::Location;
use crate::log;
use crate::utils::plural_count;

pub fn lookup_doc(args: &LookupArgs, config: &SiteConfig) -> Result<()> {
    let docs = collect_documents(config)?;
    let name = query_name(&args.doc, &docs)?;
    let index = require_index(config, &docs, "look up")?;

    let locations: Vec<Location> = index.lookup(&args.doc).collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&locations)?);
        return Ok(());
    }

    if locations.is_empty() {
        log!("lookup"; "`{}` is not linked from the sidebar", name);
        return Ok(());
    }

    log!("lookup"; "`{}` appears in {}", name, plural_count(locations.len(), "place"));
    for location in &locations {
        let title = index.section(&location.section).map_or("", |s| s.title());
        let text = index.entry_at(location).map_or("", |e| e.text());
        println!(
            "{} {}  {} {}",
            "→".green(),
            location,
            text,
            format!("({title})").dimmed()
        );
    }
    Ok(())
}

/// Display name for the queried document.
///
/// External and fragment links are rejected; unknown or ambiguous
/// documents only warn, since the sidebar may still link them.
fn query_name(query: &str, docs: &KnownDocuments) -> Result<String> {
    match docs.resolve(query) {
        Resolution::Found(id) => Ok(id.to_string()),
        Resolution::NotDocument => anyhow::bail!("`{query}` is not a document link"),
        Resolution::Missing => {
            log!("warning"; "`{}` is not a known document", query);
            Ok(query.to_owned())
        }
        Resolution::Ambiguous(ids) => {
            log!("warning"; "`{}` matches {}", query, plural_count(ids.len(), "document"));
            Ok(query.to_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_name_rejects_external_links() {
        let docs: KnownDocuments = ["/posts/gpt"].into_iter().collect();
        let err = query_name("https://github.com/boreas618", &docs).unwrap_err();
        assert!(err.to_string().contains("is not a document link"));
        assert!(query_name("#top", &docs).is_err());
    }

    #[test]
    fn test_query_name_normalizes_known_documents() {
        let docs: KnownDocuments = ["/posts/gpt", "/os-notes/"].into_iter().collect();
        assert_eq!(query_name("/posts/gpt.md", &docs).unwrap(), "posts/gpt");
        assert_eq!(query_name("/os-notes", &docs).unwrap(), "os-notes/index");
        assert_eq!(query_name("/posts/bert", &docs).unwrap(), "/posts/bert");
    }
}
