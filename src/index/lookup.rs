//! Reverse lookup: where is a document linked from?

use std::iter::FusedIterator;

use super::ContentIndex;
use super::model::{Entry, Location, Section};
use crate::content::LinkTarget;

impl ContentIndex {
    /// Every location that references `doc`, in index order.
    ///
    /// `doc` is read like a sidebar link, so `"/posts/gpt"`, `"posts/gpt.md"`
    /// and `"posts/gpt"` all find the same entries. An extension-less link
    /// also matches entries that resolved to its `/index` document, the
    /// same way `build` resolved them.
    ///
    /// The iterator is lazy. Calling `lookup` again restarts the walk; a
    /// clone resumes from the current position.
    pub fn lookup(&self, doc: &str) -> Locations<'_> {
        Locations {
            sections: &self.sections,
            target: LinkTarget::parse(doc),
            section: 0,
            group: 0,
            position: 0,
        }
    }
}

/// Lazy iterator over the locations referencing one document
#[derive(Debug, Clone)]
pub struct Locations<'a> {
    sections: &'a [Section],
    /// `None` for external links, which never match.
    target: Option<LinkTarget>,
    section: usize,
    group: usize,
    position: usize,
}

impl<'a> Locations<'a> {
    /// Next entry in walk order, regardless of target.
    fn advance(&mut self) -> Option<(Location, &'a Entry)> {
        let sections = self.sections;
        while let Some(section) = sections.get(self.section) {
            if let Some(group) = section.groups.get(self.group) {
                if let Some(entry) = group.entries.get(self.position) {
                    let location =
                        Location::new(&section.key, &group.text, self.group, self.position);
                    self.position += 1;
                    return Some((location, entry));
                }
                self.group += 1;
                self.position = 0;
            } else {
                self.section += 1;
                self.group = 0;
                self.position = 0;
            }
        }
        None
    }

    fn matches(&self, entry: &Entry) -> bool {
        self.target
            .as_ref()
            .is_some_and(|t| t.candidates().any(|id| *id == entry.doc))
    }
}

impl Iterator for Locations<'_> {
    type Item = Location;

    fn next(&mut self) -> Option<Self::Item> {
        self.target.as_ref()?;
        while let Some((location, entry)) = self.advance() {
            if self.matches(entry) {
                return Some(location);
            }
        }
        None
    }
}

impl FusedIterator for Locations<'_> {}

#[cfg(test)]
mod tests {
    use crate::content::KnownDocuments;
    use crate::index::{ContentIndex, GroupSpec, Location, SectionSpec};

    fn site() -> ContentIndex {
        let sections = vec![
            SectionSpec::new("/notes/", "Notes")
                .group(
                    GroupSpec::new("Basics")
                        .entry("Introduction", "intro")
                        .entry("Scheduling", "sched"),
                )
                .group(GroupSpec::new("Review").entry("Intro again", "/intro")),
            SectionSpec::new("/posts/", "Posts")
                .group(GroupSpec::new("OS").entry("Sched", "sched.md")),
        ];
        let docs: KnownDocuments = ["intro", "sched", "unlinked"].into_iter().collect();
        ContentIndex::build(&sections, &docs).unwrap()
    }

    #[test]
    fn test_lookup_every_occurrence() {
        let index = site();
        let found: Vec<_> = index.lookup("intro").collect();
        assert_eq!(
            found,
            vec![
                Location::new("/notes/", "Basics", 0, 0),
                Location::new("/notes/", "Review", 1, 0),
            ]
        );
        assert_eq!(index.lookup("/sched").count(), 2);
    }

    #[test]
    fn test_lookup_unreferenced_is_empty() {
        let index = site();
        assert_eq!(index.lookup("unlinked").count(), 0);
        assert_eq!(index.lookup("missing").count(), 0);
        assert_eq!(index.lookup("https://example.com").count(), 0);
    }

    #[test]
    fn test_lookup_is_restartable() {
        let index = site();
        let locations = index.lookup("sched");
        let first: Vec<_> = locations.clone().collect();
        let second: Vec<_> = locations.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_lookup_is_lazy_and_fused() {
        let index = site();
        let mut locations = index.lookup("intro");
        assert_eq!(locations.next().map(|l| l.group), Some("Basics".to_string()));
        assert!(locations.next().is_some());
        assert!(locations.next().is_none());
        assert!(locations.next().is_none());
    }

    #[test]
    fn test_lookup_by_link_finds_index_fallback() {
        let sections = vec![
            SectionSpec::new("/", "Me")
                .group(GroupSpec::new("Me").entry("OS Notes", "/os-notes")),
        ];
        let docs: KnownDocuments = ["/os-notes/"].into_iter().collect();
        let index = ContentIndex::build(&sections, &docs).unwrap();

        let expected = vec![Location::new("/", "Me", 0, 0)];
        assert_eq!(index.lookup("/os-notes").collect::<Vec<_>>(), expected);
        assert_eq!(index.lookup("os-notes/index").collect::<Vec<_>>(), expected);
        assert_eq!(index.lookup("/os-notes/").collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_clone_resumes_from_current_position() {
        let index = site();
        let mut locations = index.lookup("intro");
        locations.next();
        let rest: Vec<_> = locations.clone().collect();
        assert_eq!(rest, vec![Location::new("/notes/", "Review", 1, 0)]);
        assert_eq!(index.lookup("intro").count(), 2);
    }
}
