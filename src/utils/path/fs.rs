//! Filesystem path normalization.
//!
//! - `normalize_path` - canonicalize with a fallback for missing paths
//! - `resolve_dir` - tilde-expand and anchor a configured directory at a root

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Resolve a configured directory against `root`.
///
/// `~` is expanded first; relative results are joined onto `root`.
///
/// # Example
/// ```ignore
/// // root = /srv/app
/// resolve_dir(Path::new("."), root)        -> /srv/app
/// resolve_dir(Path::new("../shared"), root) -> /srv/shared
/// resolve_dir(Path::new("~/mods"), root)   -> /home/user/mods
/// ```
pub fn resolve_dir(path: &Path, root: &Path) -> PathBuf {
    let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
    let path = PathBuf::from(expanded);
    if path.is_relative() {
        normalize_path(&root.join(path))
    } else {
        normalize_path(&path)
    }
}
