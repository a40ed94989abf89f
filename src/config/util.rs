//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Whether `link` parses as an absolute URL with a host
///
/// # Examples
/// ```ignore
/// is_absolute_url("https://github.com/me") -> true
/// is_absolute_url("mailto:me@example.com") -> false (no host)
/// is_absolute_url("github.com/me")         -> false
/// ```
pub fn is_absolute_url(link: &str) -> bool {
    url::Url::parse(link).is_ok_and(|u| u.has_host())
}

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// Returns the absolute path to the config file if found.
///
/// # Example
/// ```text
/// /home/user/site/posts/      ← start
/// /home/user/site/sitenav.toml ← found!
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    // Absolute path: no search
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        // Move to parent directory
        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to the path as-is if absolute, or joined with cwd.
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

// ============================================================================
// tests
// ============================================================================
