//! Content documents: identifiers, link resolution, directory scanning.
//!
//! | Module | Purpose                                         |
//! |--------|-------------------------------------------------|
//! | `id`   | `DocId` normalization for links and files       |
//! | `link` | Syntactic link classification                   |
//! | `docs` | `KnownDocuments` set and `Resolution`           |
//! | `scan` | Walk the content directory for documents        |

mod docs;
mod id;
mod link;
mod scan;

pub use docs::{KnownDocuments, Resolution};
pub use id::{DocId, LinkTarget};
pub use scan::{ScanOptions, scan_documents};
