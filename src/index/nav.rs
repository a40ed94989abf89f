//! Top navigation bar link checking.

use super::error::{ValidationError, ValidationErrors};
use crate::content::{KnownDocuments, Resolution};
use crate::config::NavItem;

/// Check every internal nav bar link against the known documents.
///
/// External links are not documents and are skipped. Ambiguous links are
/// reported like missing ones since the bar has no section coordinates.
pub fn check_nav(items: &[NavItem], known: &KnownDocuments) -> ValidationErrors {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| {
            matches!(
                known.resolve(&item.link),
                Resolution::Missing | Resolution::Ambiguous(_)
            )
        })
        .map(|(position, item)| ValidationError::DanglingNavLink {
            position,
            text: item.text.clone(),
            target: item.link.clone(),
        })
        .collect()
}
