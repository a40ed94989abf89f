//! Presentation projection of the index.

use serde::Serialize;

use super::ContentIndex;

/// Sidebar tree ready for a navigation renderer
///
/// Mirrors the index one-to-one: nothing is sorted, filtered or merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedIndex<'a> {
    pub sections: Vec<RenderedSection<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedSection<'a> {
    pub key: &'a str,
    pub title: &'a str,
    pub groups: Vec<RenderedGroup<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedGroup<'a> {
    pub text: &'a str,
    pub items: Vec<RenderedEntry<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderedEntry<'a> {
    pub text: &'a str,
    pub link: &'a str,
}

impl ContentIndex {
    /// Project the index into its nested presentation form.
    pub fn render(&self) -> RenderedIndex<'_> {
        let sections = self
            .sections
            .iter()
            .map(|section| RenderedSection {
                key: &section.key,
                title: &section.title,
                groups: section
                    .groups
                    .iter()
                    .map(|group| RenderedGroup {
                        text: &group.text,
                        items: group
                            .entries
                            .iter()
                            .map(|entry| RenderedEntry {
                                text: &entry.text,
                                link: &entry.link,
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        RenderedIndex { sections }
    }
}
