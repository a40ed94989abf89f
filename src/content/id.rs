//! Canonical content-document identifiers.
//!
//! Links and files are normalized into the same key space so a sidebar link
//! can be compared against the documents found on disk.
//!
//! ```text
//! link  /                     -> index
//! link  /posts/               -> posts/index
//! link  /posts/prologue       -> posts/prologue (or posts/prologue/index)
//! link  posts/prologue.md     -> posts/prologue
//! file  content/posts/gpt.md  -> posts/gpt
//! ```

use std::fmt;
use std::path::{Component, Path};

use percent_encoding::percent_decode_str;
use serde::Serialize;

use super::link::{LinkKind, strip_query_fragment};

/// Index document name for directory-style links.
const INDEX: &str = "index";

/// Extensions stripped from links before lookup.
const LINK_EXTENSIONS: &[&str] = &[".md", ".html"];

/// Canonical document identifier
///
/// Invariants:
/// - No leading or trailing `/`
/// - No file extension
/// - Directory documents end in `index`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DocId(String);

impl DocId {
    /// Primary document a link points at.
    ///
    /// Returns `None` for external and fragment-only links.
    pub fn from_link(link: &str) -> Option<Self> {
        LinkTarget::parse(link).map(|t| t.primary)
    }

    /// Document id for a file under `root`.
    ///
    /// Returns `None` when the file is outside `root` or its extension is
    /// not one of `extensions`.
    pub fn from_file(path: &Path, root: &Path, extensions: &[String]) -> Option<Self> {
        let relative = path.strip_prefix(root).ok()?;
        let ext = relative.extension()?.to_str()?;
        if !extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)) {
            return None;
        }

        let stem = relative.with_extension("");
        let mut segments = Vec::new();
        for component in stem.components() {
            match component {
                Component::Normal(s) => segments.push(s.to_str()?.to_owned()),
                Component::CurDir => {}
                _ => return None,
            }
        }
        if segments.is_empty() {
            return None;
        }
        Some(Self(segments.join("/")))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn from_segments(segments: &[&str]) -> Self {
        if segments.is_empty() {
            Self(INDEX.to_owned())
        } else {
            Self(segments.join("/"))
        }
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DocId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DocId {
    /// Treats the input as a link; falls back to the raw text for external links.
    fn from(value: &str) -> Self {
        Self::from_link(value).unwrap_or_else(|| Self(value.to_owned()))
    }
}

// ============================================================================
// LinkTarget
// ============================================================================

/// Candidate documents for one internal link
///
/// An extension-less link without trailing slash (`/posts/foo`) may be
/// served by either `posts/foo.md` or `posts/foo/index.md`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    pub primary: DocId,
    pub fallback: Option<DocId>,
}

impl LinkTarget {
    /// Parse an internal link into its candidate documents.
    pub fn parse(link: &str) -> Option<Self> {
        let kind = LinkKind::parse(link.trim());
        let raw = match kind {
            LinkKind::SiteRoot(s) | LinkKind::Relative(s) => s,
            LinkKind::External(_) | LinkKind::Fragment(_) => return None,
        };

        let path = strip_query_fragment(raw);
        let decoded = percent_decode_str(path)
            .decode_utf8()
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| path.to_owned());

        let is_dir = matches!(decoded.rsplit('/').next(), Some("" | "." | ".."));
        // `..` climbs like a browser would, stopping at the site root
        let mut segments: Vec<&str> = Vec::new();
        for segment in decoded.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    segments.pop();
                }
                s => segments.push(s),
            }
        }

        if is_dir {
            segments.push(INDEX);
            return Some(Self {
                primary: DocId::from_segments(&segments),
                fallback: None,
            });
        }

        let mut explicit_ext = false;
        if let Some(last) = segments.last_mut() {
            let name: &str = *last;
            for ext in LINK_EXTENSIONS {
                if let Some(stem) = name.strip_suffix(ext)
                    && !stem.is_empty()
                {
                    *last = stem;
                    explicit_ext = true;
                    break;
                }
            }
        }

        let primary = DocId::from_segments(&segments);
        let fallback = if explicit_ext || segments.last().is_none_or(|s| *s == INDEX) {
            None
        } else {
            segments.push(INDEX);
            Some(DocId::from_segments(&segments))
        };

        Some(Self { primary, fallback })
    }

    /// All candidates, primary first.
    pub fn candidates(&self) -> impl Iterator<Item = &DocId> {
        std::iter::once(&self.primary).chain(self.fallback.as_ref())
    }
}
