//! Content index data model.
//!
//! Two layers:
//! - `*Spec` types: authored, unvalidated input (what the config describes)
//! - `Section` / `Group` / `Entry`: validated, immutable, owned by `ContentIndex`

use std::fmt;

use owo_colors::OwoColorize;
use serde::Serialize;

use crate::content::DocId;

// ============================================================================
// Unvalidated input
// ============================================================================

/// Authored section: a path prefix with ordered groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpec {
    pub key: String,
    pub title: String,
    pub groups: Vec<GroupSpec>,
}

/// Authored group of links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSpec {
    pub text: String,
    pub entries: Vec<EntrySpec>,
}

/// Authored link: display text plus target identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySpec {
    pub text: String,
    pub link: String,
}

impl SectionSpec {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            groups: Vec::new(),
        }
    }

    pub fn group(mut self, group: GroupSpec) -> Self {
        self.groups.push(group);
        self
    }
}

impl GroupSpec {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            entries: Vec::new(),
        }
    }

    pub fn entry(mut self, text: impl Into<String>, link: impl Into<String>) -> Self {
        self.entries.push(EntrySpec {
            text: text.into(),
            link: link.into(),
        });
        self
    }
}

// ============================================================================
// Validated index
// ============================================================================

/// A validated site section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub(super) key: String,
    pub(super) title: String,
    pub(super) groups: Vec<Group>,
}

impl Section {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }
}

/// A validated group inside a section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub(super) text: String,
    pub(super) entries: Vec<Entry>,
}

impl Group {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

/// A validated link whose target resolved to exactly one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub(super) text: String,
    /// Target as authored.
    pub(super) link: String,
    /// Document the link resolved to.
    pub(super) doc: DocId,
}

impl Entry {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn doc(&self) -> &DocId {
        &self.doc
    }
}

// ============================================================================
// Location
// ============================================================================

/// Coordinates of one entry inside the index.
///
/// `group_index` disambiguates groups that share a label; `position` is the
/// zero-based entry position inside its group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Location {
    pub section: String,
    pub group: String,
    pub group_index: usize,
    pub position: usize,
}

impl Location {
    pub fn new(
        section: impl Into<String>,
        group: impl Into<String>,
        group_index: usize,
        position: usize,
    ) -> Self {
        Self {
            section: section.into(),
            group: group.into(),
            group_index,
            position,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.section.cyan(),
            ">".dimmed(),
            self.group,
            format_args!("#{}", self.position).dimmed()
        )
    }
}
