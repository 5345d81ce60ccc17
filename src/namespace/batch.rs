//! Installing whole file sets with index deferral.

use std::ffi::OsStr;
use std::path::Path;

use super::assemble::install_at_path;
use super::node::{INDEX_KEY, NodeRef};
use crate::error::LoadError;
use crate::fileset::FileSet;
use crate::module::{ModuleLoader, SourceKind};

/// Install every file set into `root`, in order.
///
/// Within a set, non-index files are installed first and index files last,
/// so an index splice extends the fully populated parent. Later sets
/// overwrite earlier ones at colliding keys. Returns the number of files
/// installed; the first error aborts the pass.
pub fn load_file_sets<'a, I>(
    root: &NodeRef,
    sets: I,
    loader: &dyn ModuleLoader,
) -> Result<usize, LoadError>
where
    I: IntoIterator<Item = &'a FileSet>,
{
    let mut installed = 0;
    for files in sets {
        let (indexes, regular): (Vec<_>, Vec<_>) = files
            .iter()
            .partition(|(path, _)| is_index_file(path, loader));

        for (path, name) in regular {
            install_at_path(root, name, path, false, loader)?;
            installed += 1;
        }
        for (path, name) in indexes {
            install_at_path(root, name, path, true, loader)?;
            installed += 1;
        }
    }
    Ok(installed)
}

/// A code file whose name, extension removed, is `index` (any ASCII case).
pub fn is_index_file(path: &Path, loader: &dyn ModuleLoader) -> bool {
    path.file_stem()
        .and_then(OsStr::to_str)
        .is_some_and(|stem| stem.eq_ignore_ascii_case(INDEX_KEY))
        && loader.source_kind(path) == Some(SourceKind::Code)
}
