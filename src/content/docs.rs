//! Set of known content documents and link resolution against it.

use rustc_hash::FxHashSet;

use super::id::{DocId, LinkTarget};

/// Outcome of resolving one link against the known documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Exactly one document matches.
    Found(DocId),
    /// No candidate exists.
    Missing,
    /// More than one candidate exists (`foo.md` and `foo/index.md`).
    Ambiguous(Vec<DocId>),
    /// External or fragment-only link, never a document.
    NotDocument,
}

/// Identifiers of every content document that exists
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownDocuments {
    ids: FxHashSet<DocId>,
}

impl KnownDocuments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: DocId) -> bool {
        self.ids.insert(id)
    }

    pub fn contains(&self, id: &DocId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in lexical order (for stable listing).
    pub fn sorted(&self) -> Vec<&DocId> {
        let mut ids: Vec<_> = self.ids.iter().collect();
        ids.sort_unstable();
        ids
    }

    /// Resolve a link to the single document it names.
    pub fn resolve(&self, link: &str) -> Resolution {
        let Some(target) = LinkTarget::parse(link) else {
            return Resolution::NotDocument;
        };

        let mut matches: Vec<DocId> = target
            .candidates()
            .filter(|id| self.contains(id))
            .cloned()
            .collect();

        match matches.len() {
            0 => Resolution::Missing,
            1 => Resolution::Found(matches.remove(0)),
            _ => Resolution::Ambiguous(matches),
        }
    }
}

impl FromIterator<DocId> for KnownDocuments {
    fn from_iter<I: IntoIterator<Item = DocId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for KnownDocuments {
    /// Each item is normalized like a link (`"/posts/"` becomes `posts/index`).
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(DocId::from).collect()
    }
}
