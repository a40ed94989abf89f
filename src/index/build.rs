//! Index construction and validation.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::{ValidationError, ValidationErrors};
use super::model::{Entry, Group, Location, Section, SectionSpec};
use super::ContentIndex;
use crate::content::{DocId, KnownDocuments, Resolution};

/// How repeated link targets are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Repeated targets are intentional cross-listing.
    #[default]
    Allow,
    /// A target may appear at most once per group.
    Group,
    /// A target may appear at most once in the whole index.
    Index,
}

impl ContentIndex {
    /// Build with the default policy (duplicates allowed).
    #[allow(dead_code)]
    pub fn build(
        sections: &[SectionSpec],
        known: &KnownDocuments,
    ) -> Result<Self, ValidationErrors> {
        Self::build_with(sections, known, DuplicatePolicy::default())
    }

    /// Validate every entry against `known` and assemble the index.
    ///
    /// Errors accumulate: every dangling, ambiguous or duplicate entry and
    /// every repeated section key is reported, in input order.
    pub fn build_with(
        sections: &[SectionSpec],
        known: &KnownDocuments,
        policy: DuplicatePolicy,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let mut seen_keys: FxHashMap<&str, usize> = FxHashMap::default();
        let mut seen_in_index: FxHashMap<DocId, Location> = FxHashMap::default();
        let mut built = Vec::with_capacity(sections.len());

        for (section_pos, spec) in sections.iter().enumerate() {
            if let Some(&first) = seen_keys.get(spec.key.as_str()) {
                errors.push(ValidationError::DuplicateSection {
                    key: spec.key.clone(),
                    first,
                    second: section_pos,
                });
            } else {
                seen_keys.insert(spec.key.as_str(), section_pos);
            }

            let mut groups = Vec::with_capacity(spec.groups.len());
            for (group_index, group) in spec.groups.iter().enumerate() {
                let mut seen_in_group: FxHashMap<DocId, Location> = FxHashMap::default();
                let mut entries = Vec::with_capacity(group.entries.len());

                for (position, entry) in group.entries.iter().enumerate() {
                    let location = Location::new(&spec.key, &group.text, group_index, position);

                    let doc = match known.resolve(&entry.link) {
                        Resolution::Found(doc) => doc,
                        Resolution::Ambiguous(candidates) => {
                            errors.push(ValidationError::AmbiguousReference {
                                location,
                                target: entry.link.clone(),
                                candidates,
                            });
                            continue;
                        }
                        Resolution::Missing | Resolution::NotDocument => {
                            errors.push(ValidationError::DanglingReference {
                                location,
                                target: entry.link.clone(),
                            });
                            continue;
                        }
                    };

                    let seen = match policy {
                        DuplicatePolicy::Allow => None,
                        DuplicatePolicy::Group => Some(&mut seen_in_group),
                        DuplicatePolicy::Index => Some(&mut seen_in_index),
                    };
                    if let Some(seen) = seen {
                        if let Some(first) = seen.get(&doc) {
                            errors.push(ValidationError::DuplicateEntry {
                                location: location.clone(),
                                target: entry.link.clone(),
                                first: first.clone(),
                            });
                        } else {
                            seen.insert(doc.clone(), location);
                        }
                    }

                    entries.push(Entry {
                        text: entry.text.clone(),
                        link: entry.link.clone(),
                        doc,
                    });
                }

                groups.push(Group {
                    text: group.text.clone(),
                    entries,
                });
            }

            built.push(Section {
                key: spec.key.clone(),
                title: spec.title.clone(),
                groups,
            });
        }

        errors.into_result(ContentIndex { sections: built })
    }
}
