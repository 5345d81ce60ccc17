//! Ordered file path -> namespace name mapping.
//!
//! A [`FileSet`] is one discovered batch of files for a single namespace
//! root. Entries are unique by path and keep insertion order, which is the
//! order the batch orchestrator installs them in.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

/// Mapping from absolute file path to slash-delimited namespace name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSet {
    entries: IndexMap<PathBuf, String>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a self-mapped set: every path maps to its own string form.
    ///
    /// Callers pass paths already sorted; order is preserved as given.
    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut set = Self::new();
        for path in paths {
            let path = path.into();
            let name = path_to_name(&path);
            set.entries.insert(path, name);
        }
        set
    }

    /// Insert or replace the name for `path`, keeping its original position.
    pub fn insert(&mut self, path: impl Into<PathBuf>, name: impl Into<String>) {
        self.entries.insert(path.into(), name.into());
    }

    pub fn get(&self, path: &Path) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    pub(crate) fn get_mut(&mut self, path: &Path) -> Option<&mut String> {
        self.entries.get_mut(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.entries
            .iter()
            .map(|(path, name)| (path.as_path(), name.as_str()))
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (&PathBuf, &mut String)> {
        self.entries.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<P, N> FromIterator<(P, N)> for FileSet
where
    P: Into<PathBuf>,
    N: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (P, N)>>(iter: T) -> Self {
        let mut set = Self::new();
        for (path, name) in iter {
            set.insert(path, name);
        }
        set
    }
}

/// Slash-delimited string form of a path.
fn path_to_name(path: &Path) -> String {
    let name = path.to_string_lossy();
    if cfg!(windows) {
        name.replace('\\', "/")
    } else {
        name.into_owned()
    }
}
