//! Render command: emit the validated navigation model as JSON.

use std::fs;

use anyhow::{Context, Result};
use serde::Serialize;

use super::RenderArgs;
use super::common::{collect_documents, require_index};
use crate::config::{NavItem, SiteConfig, SocialLink};
use crate::index::{ContentIndex, RenderedIndex};
use crate::log;

/// Everything a navigation renderer needs
#[derive(Debug, Serialize)]
pub struct SiteModel<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub math: bool,
    pub nav: &'a [NavItem],
    pub social: &'a [SocialLink],
    pub sidebar: RenderedIndex<'a>,
}

impl<'a> SiteModel<'a> {
    pub fn new(config: &'a SiteConfig, index: &'a ContentIndex) -> Self {
        Self {
            title: &config.site.title,
            description: &config.site.description,
            math: config.site.math,
            nav: &config.site.nav,
            social: &config.site.social,
            sidebar: index.render(),
        }
    }
}

/// Validate, render and write the JSON output.
pub fn render_site(args: &RenderArgs, config: &SiteConfig) -> Result<()> {
    let docs = collect_documents(config)?;
    let index = require_index(config, &docs, "render")?;

    let json = to_json(config, &index, args)?;

    match &args.output {
        Some(path) => {
            fs::write(path, json.as_bytes())
                .with_context(|| format!("failed to write `{}`", path.display()))?;
            log!("render"; "wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Serialize the site model (or only the sidebar) to JSON.
fn to_json(config: &SiteConfig, index: &ContentIndex, args: &RenderArgs) -> Result<String> {
    let json = if args.sidebar_only {
        serialize(&index.render(), args.pretty)
    } else {
        serialize(&SiteModel::new(config, index), args.pretty)
    };
    json.context("failed to serialize navigation model")
}

fn serialize<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::common::build_index;
    use crate::config::test_parse_config;
    use crate::content::KnownDocuments;

    fn args(sidebar_only: bool) -> RenderArgs {
        RenderArgs {
            pretty: false,
            sidebar_only,
            output: None,
        }
    }

    #[test]
    fn test_site_model_json() {
        let config = test_parse_config(
            r#"
math = true

[[site.nav]]
text = "Me"
link = "/"

[[sidebar]]
prefix = "/"
text = "Me"
items = [{ text = "Biography", link = "/" }]
"#,
        );
        let docs: KnownDocuments = ["/"].into_iter().collect();
        let index = build_index(&config, &docs).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&to_json(&config, &index, &args(false)).unwrap()).unwrap();
        assert_eq!(json["title"], "Test");
        assert_eq!(json["math"], true);
        assert_eq!(json["nav"][0]["link"], "/");
        assert_eq!(json["sidebar"]["sections"][0]["groups"][0]["items"][0]["text"], "Biography");

        let sidebar: serde_json::Value =
            serde_json::from_str(&to_json(&config, &index, &args(true)).unwrap()).unwrap();
        assert!(sidebar.get("title").is_none());
        assert_eq!(sidebar["sections"][0]["key"], "/");
    }
}
