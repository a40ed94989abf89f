//! Content directory scanning.

use std::path::{Path, PathBuf};

use jwalk::WalkDir;
use thiserror::Error;

use super::docs::KnownDocuments;
use super::id::DocId;
use crate::debug;

const IGNORED_FILES: &[&str] = &[".DS_Store"];

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("content directory `{0}` does not exist")]
    MissingRoot(PathBuf),

    #[error("failed to walk content directory")]
    Walk(#[from] jwalk::Error),
}

/// Scanner settings derived from `[build]`
#[derive(Debug, Clone)]
pub struct ScanOptions<'a> {
    /// Document file extensions (without dot).
    pub extensions: &'a [String],
    /// Directory names never descended into.
    pub exclude: &'a [String],
}

/// Collect the id of every content document under `root`.
///
/// Hidden directories (`.vitepress`, `.git`, ...) and `exclude` names are
/// skipped, so framework build output never counts as content.
pub fn scan_documents(root: &Path, options: &ScanOptions<'_>) -> Result<KnownDocuments, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::MissingRoot(root.to_path_buf()));
    }

    let exclude: Vec<String> = options.exclude.to_vec();
    let walker = WalkDir::new(root)
        .sort(true)
        .skip_hidden(true)
        .process_read_dir(move |_, _, _, children| {
            children.retain(|entry| match entry {
                Ok(e) => {
                    !(e.file_type().is_dir()
                        && e.file_name().to_str().is_some_and(|n| exclude.iter().any(|x| x == n)))
                }
                // Keep errors so the walk loop reports them
                Err(_) => true,
            });
        });

    let mut docs = KnownDocuments::new();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_str().unwrap_or_default();
        if IGNORED_FILES.contains(&name) {
            continue;
        }

        let path = entry.path();
        if let Some(id) = DocId::from_file(&path, root, options.extensions) {
            debug!("scan"; "{} -> {}", path.display(), id);
            docs.insert(id);
        }
    }

    Ok(docs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "# doc\n").unwrap();
    }

    fn md() -> Vec<String> {
        vec!["md".to_string()]
    }

    #[test]
    fn test_scan_collects_markdown() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "index.md");
        touch(dir.path(), "posts/gpt.md");
        touch(dir.path(), "posts/bert.md");
        touch(dir.path(), "public/logo.png");

        let exts = md();
        let options = ScanOptions { extensions: &exts, exclude: &[] };
        let docs = scan_documents(dir.path(), &options).unwrap();

        assert_eq!(docs.len(), 3);
        assert!(docs.contains(&DocId::from("/")));
        assert!(docs.contains(&DocId::from("/posts/gpt")));
    }

    #[test]
    fn test_scan_skips_hidden_and_excluded() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "notes/intro.md");
        touch(dir.path(), ".vitepress/dist/notes/intro.md");
        touch(dir.path(), "node_modules/pkg/README.md");

        let exts = md();
        let exclude = vec!["node_modules".to_string()];
        let options = ScanOptions { extensions: &exts, exclude: &exclude };
        let docs = scan_documents(dir.path(), &options).unwrap();

        let ids: Vec<_> = docs.sorted().into_iter().map(DocId::as_str).collect();
        assert_eq!(ids, vec!["notes/intro"]);
    }

    #[test]
    fn test_scan_missing_root() {
        let dir = TempDir::new().unwrap();
        let exts = md();
        let options = ScanOptions { extensions: &exts, exclude: &[] };
        let err = scan_documents(&dir.path().join("nope"), &options).unwrap_err();
        assert!(matches!(err, ScanError::MissingRoot(_)));
    }
}
