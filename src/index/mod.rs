//! Content index: validated sidebar model.
//!
//! The index maps each site section (a path prefix such as `/os-notes/`) to
//! its ordered groups of links. It is built once from the authored config
//! and the set of documents on disk, and is immutable afterwards.
//!
//! ```text
//! [SectionSpec] + KnownDocuments
//!        │
//!        ▼ build / build_with        (fail-accumulating)
//! ContentIndex ──► lookup(doc)       (every location linking to doc)
//!        └──────► render()           (order-preserving projection)
//! ```
//!
//! | Module   | Purpose                                       |
//! |----------|-----------------------------------------------|
//! | `model`  | Input specs and validated types               |
//! | `build`  | Construction and validation                   |
//! | `lookup` | Reverse lookup iterator                       |
//! | `render` | Serializable presentation tree                |
//! | `nav`    | Top nav bar link checks                       |
//! | `error`  | `ValidationError` / `ValidationErrors`        |

mod build;
mod error;
mod lookup;
mod model;
mod nav;
mod render;

use model::Entry;

pub use build::DuplicatePolicy;
pub use error::{ValidationError, ValidationErrors};
pub use model::{GroupSpec, Location, Section, SectionSpec};
pub use nav::check_nav;
pub use render::RenderedIndex;

/// Validated, immutable sidebar index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentIndex {
    sections: Vec<Section>,
}

impl ContentIndex {
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Section by key (path prefix).
    pub fn section(&self, key: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.key == key)
    }

    /// Entry at `location`, if the location came from this index.
    pub fn entry_at(&self, location: &Location) -> Option<&Entry> {
        self.section(&location.section)?
            .groups()
            .get(location.group_index)?
            .entries()
            .get(location.position)
    }

    /// Total number of entries across all groups.
    pub fn entry_count(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|s| &s.groups)
            .map(|g| g.entries.len())
            .sum()
    }
}
