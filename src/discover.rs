//! Finding loadable files under a namespace directory.

use std::path::{Path, PathBuf};

use jwalk::WalkDir;

use crate::debug;
use crate::module::Extensions;
use crate::utils::plural_count;

/// Collect every loadable file under `<search_dir>/<namespace>/`.
///
/// Recurses to any depth, skipping hidden entries. Only files whose
/// extension is a configured code or template extension are kept. The result
/// is sorted by raw path string, so `user.json` precedes `user/profile.json`
/// and a module is installed before the directory that extends it. A missing
/// directory yields an empty list.
pub fn discover_files(search_dir: &Path, namespace: &str, extensions: &Extensions) -> Vec<PathBuf> {
    let dir = search_dir.join(namespace);
    if !dir.is_dir() {
        return Vec::new();
    }

    let mut files: Vec<_> = WalkDir::new(&dir)
        .skip_hidden(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|path| extensions.kind_of(path).is_some())
        .collect();
    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

    debug!("discover"; "{} under {}", plural_count(files.len(), "file"), dir.display());
    files
}
