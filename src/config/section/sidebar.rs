//! `[[sidebar]]` configuration.
//!
//! Each table declares one site section keyed by its path prefix. A section
//! lists its links either directly (`items`, one group titled with the
//! section's text) or as labeled `groups`.
//!
//! # Example
//!
//! ```toml
//! [[sidebar]]
//! prefix = "/os-notes/"
//! text = "OS Notes"
//! items = [
//!     { text = "Introduction", link = "/os-notes/introduction" },
//!     { text = "Scheduling", link = "/os-notes/scheduling" },
//! ]
//!
//! [[sidebar]]
//! prefix = "/posts/"
//! text = "Posts"
//!
//! [[sidebar.groups]]
//! text = "NLP"
//! items = [{ text = "GPT", link = "/posts/gpt" }]
//! ```

use serde::{Deserialize, Serialize};

use super::site::NavItem;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::index::{GroupSpec, SectionSpec};

/// One sidebar section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SidebarSection {
    /// Path prefix the sidebar applies to (e.g., "/posts/").
    pub prefix: String,

    /// Section title.
    pub text: String,

    /// Links of a single-group section.
    #[serde(default)]
    pub items: Vec<NavItem>,

    /// Labeled groups of a multi-group section.
    #[serde(default)]
    pub groups: Vec<SidebarGroup>,
}

/// Labeled group of sidebar links
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SidebarGroup {
    pub text: String,
    #[serde(default)]
    pub items: Vec<NavItem>,
}

impl SidebarSection {
    /// Convert to the index's input form, preserving order.
    pub fn to_spec(&self) -> SectionSpec {
        let section = SectionSpec::new(&self.prefix, &self.text);
        if self.groups.is_empty() {
            return section.group(group_spec(&self.text, &self.items));
        }
        self.groups
            .iter()
            .fold(section, |section, g| section.group(group_spec(&g.text, &g.items)))
    }

    /// Validate one section.
    ///
    /// # Checks
    /// - `prefix` starts and ends with `/`
    /// - `items` and `groups` are mutually exclusive
    /// - every link has text and a target
    /// - empty sections and groups are warned about
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        if !self.prefix.starts_with('/') || !self.prefix.ends_with('/') {
            diag.error_with_hint(
                field.field("prefix"),
                format!("prefix `{}` must start and end with `/`", self.prefix),
                format!("prefix = \"/{}/\"", self.prefix.trim_matches('/')),
            );
        }

        if self.text.trim().is_empty() {
            diag.error(field.field("text"), "section text must not be empty");
        }

        if !self.items.is_empty() && !self.groups.is_empty() {
            diag.error_with_hint(
                field.clone(),
                "section sets both `items` and `groups`",
                "move the loose items into a `[[sidebar.groups]]` entry",
            );
        }

        if self.items.is_empty() && self.groups.is_empty() {
            diag.warn(field.clone(), "section has no entries");
        }

        let items = field.field("items");
        for (i, item) in self.items.iter().enumerate() {
            item.validate(&items.index(i), diag);
        }

        let groups = field.field("groups");
        for (g, group) in self.groups.iter().enumerate() {
            let group_field = groups.index(g);
            if group.text.trim().is_empty() {
                diag.error(group_field.field("text"), "group text must not be empty");
            }
            if group.items.is_empty() {
                diag.warn(group_field.clone(), "group has no entries");
            }
            let items = group_field.field("items");
            for (i, item) in group.items.iter().enumerate() {
                item.validate(&items.index(i), diag);
            }
        }
    }
}

fn group_spec(text: &str, items: &[NavItem]) -> GroupSpec {
    items
        .iter()
        .fold(GroupSpec::new(text), |group, item| group.entry(&item.text, &item.link))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        sidebar: Vec<SidebarSection>,
    }

    fn parse(toml_str: &str) -> Vec<SidebarSection> {
        toml::from_str::<Wrapper>(toml_str).unwrap().sidebar
    }

    #[test]
    fn test_single_group_section() {
        let sections = parse(
            r#"
            [[sidebar]]
            prefix = "/os-notes/"
            text = "OS Notes"
            items = [
                { text = "Introduction", link = "/os-notes/introduction" },
                { text = "Scheduling", link = "/os-notes/scheduling" },
            ]
            "#,
        );
        let spec = sections[0].to_spec();
        assert_eq!(spec.key, "/os-notes/");
        assert_eq!(spec.groups.len(), 1);
        assert_eq!(spec.groups[0].text, "OS Notes");
        assert_eq!(spec.groups[0].entries[1].link, "/os-notes/scheduling");
    }

    #[test]
    fn test_multi_group_section_keeps_order() {
        let sections = parse(
            r#"
            [[sidebar]]
            prefix = "/posts/"
            text = "Posts"

            [[sidebar.groups]]
            text = "Operating Systems"
            items = [{ text = "CLoF", link = "/posts/CLoF" }]

            [[sidebar.groups]]
            text = "NLP"
            items = [
                { text = "GPT", link = "/posts/gpt" },
                { text = "BERT", link = "/posts/bert" },
            ]
            "#,
        );
        let spec = sections[0].to_spec();
        let labels: Vec<_> = spec.groups.iter().map(|g| g.text.as_str()).collect();
        assert_eq!(labels, vec!["Operating Systems", "NLP"]);
        let nlp: Vec<_> = spec.groups[1].entries.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(nlp, vec!["GPT", "BERT"]);
    }

    #[test]
    fn test_validate_prefix_and_shape() {
        let section = SidebarSection {
            prefix: "posts".into(),
            text: "Posts".into(),
            items: vec![NavItem {
                text: "GPT".into(),
                link: "/posts/gpt".into(),
            }],
            groups: vec![SidebarGroup {
                text: "NLP".into(),
                items: Vec::new(),
            }],
        };
        let mut diag = ConfigDiagnostics::new();
        section.validate(&FieldPath::new("sidebar").index(0), &mut diag);

        let fields: Vec<_> = diag.errors().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["sidebar[0].prefix", "sidebar[0]"]);
        assert_eq!(diag.warnings().count(), 1);
        let hint = diag.errors().next().and_then(|e| e.hint.as_deref());
        assert_eq!(hint, Some("prefix = \"/posts/\""));
    }

    #[test]
    fn test_validate_empty_section_warns() {
        let section = SidebarSection {
            prefix: "/".into(),
            text: "Me".into(),
            items: Vec::new(),
            groups: Vec::new(),
        };
        let mut diag = ConfigDiagnostics::new();
        section.validate(&FieldPath::new("sidebar").index(0), &mut diag);
        assert!(diag.is_clean());
        assert_eq!(diag.warnings().count(), 1);
    }
}
