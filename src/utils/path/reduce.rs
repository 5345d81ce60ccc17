//! Namespace name reduction for discovered file sets.
//!
//! Two passes turn absolute paths into namespace names:
//!
//! ```text
//! /srv/app/models/user.json          user.json            user
//! /srv/app/models/admin/role.json -> admin/role.json   -> admin/role
//! /srv/app/models/index.json         index.json           index
//!                    reduce_common_prefix      strip_extensions
//! ```

use std::path::PathBuf;

use rustc_hash::FxHashMap;

use crate::fileset::FileSet;

/// Remove the longest shared directory prefix from every name in the set.
///
/// - Empty set: returned unchanged.
/// - Single entry: its name becomes the base file name.
/// - Otherwise names are split on `/` and the leading segments shared by all
///   names are removed (up to and including the `/` that ends them).
///
/// The scan never consumes the final segment of the shortest name, so every
/// reduced name is non-empty. Names with no shared leading segment are left
/// as they are.
pub fn reduce_common_prefix(mut files: FileSet) -> FileSet {
    match files.len() {
        0 => return files,
        1 => {
            for (_, name) in files.iter_mut() {
                *name = base_name(name).to_string();
            }
            return files;
        }
        _ => {}
    }

    let prefix_len = common_prefix_len(&files);
    if prefix_len > 0 {
        for (_, name) in files.iter_mut() {
            name.replace_range(..prefix_len, "");
        }
    }
    files
}

/// Byte length of the shared `seg/seg/.../` prefix across all names.
fn common_prefix_len(files: &FileSet) -> usize {
    let segments: Vec<Vec<&str>> = files
        .iter()
        .map(|(_, name)| name.split('/').collect())
        .collect();
    let shortest = segments.iter().map(Vec::len).min().unwrap_or(0);
    let first = &segments[0];

    let mut index = 0;
    while index + 1 < shortest && segments.iter().all(|s| s[index] == first[index]) {
        index += 1;
    }

    first[..index].iter().map(|segment| segment.len() + 1).sum()
}

/// Strip file extensions from every name unless stripping makes names collide.
///
/// The first entry producing a stripped name claims it. When a later entry
/// produces the same stripped name, the claimant is restored to its original
/// name and the stripped name is marked as conflicted; the later entry (and
/// any further one) keeps its original name. Every entry involved in a
/// collision therefore ends up with its extension intact.
pub fn strip_extensions(mut files: FileSet) -> FileSet {
    // stripped name -> claimant, `None` once conflicted
    let mut claims: FxHashMap<String, Option<(PathBuf, String)>> = FxHashMap::default();
    let mut restore = Vec::new();

    for (path, name) in files.iter_mut() {
        let stripped = strip_extension(name).to_string();
        match claims.get_mut(&stripped) {
            Some(claim) => {
                if let Some(claimant) = claim.take() {
                    restore.push(claimant);
                }
            }
            None => {
                let original = std::mem::replace(name, stripped.clone());
                claims.insert(stripped, Some((path.clone(), original)));
            }
        }
    }

    for (path, original) in restore {
        if let Some(name) = files.get_mut(&path) {
            *name = original;
        }
    }
    files
}

/// Final `/`-delimited segment of a name.
#[inline]
pub fn base_name(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

/// Extension of the final segment including the dot (`"admin/users.json"` -> `".json"`).
///
/// A dot at the very start of the segment does not begin an extension, so
/// `".env"` has none.
pub fn extension_of(name: &str) -> &str {
    let base = base_name(name);
    match base.rfind('.') {
        Some(dot) if dot > 0 => &base[dot..],
        _ => "",
    }
}

/// Name with the extension of its final segment removed.
#[inline]
pub fn strip_extension(name: &str) -> &str {
    &name[..name.len() - extension_of(name).len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn self_mapped(paths: &[&str]) -> FileSet {
        FileSet::from_paths(paths.iter().copied())
    }

    fn names(files: &FileSet) -> Vec<&str> {
        files.iter().map(|(_, name)| name).collect()
    }

    #[test]
    fn test_reduce_empty() {
        let files = reduce_common_prefix(FileSet::new());
        assert!(files.is_empty());
    }

    #[test]
    fn test_reduce_single_file_to_basename() {
        let files = reduce_common_prefix(self_mapped(&["/a/b/c.js"]));
        assert_eq!(files.get(Path::new("/a/b/c.js")), Some("c.js"));
    }

    #[test]
    fn test_reduce_nested_file() {
        let files = reduce_common_prefix(self_mapped(&["/x/y/f1.js", "/x/y/z/f2.js"]));
        assert_eq!(files.get(Path::new("/x/y/f1.js")), Some("f1.js"));
        assert_eq!(files.get(Path::new("/x/y/z/f2.js")), Some("z/f2.js"));
    }

    #[test]
    fn test_reduce_common_prefix_multiple() {
        let files = reduce_common_prefix(self_mapped(&[
            "/common/path/file1.js",
            "/common/path/file2.js",
            "/common/path/subdir/file3.js",
        ]));
        assert_eq!(names(&files), ["file1.js", "file2.js", "subdir/file3.js"]);
    }

    #[test]
    fn test_reduce_no_shared_directory() {
        let files = reduce_common_prefix(self_mapped(&["/path1/file1.js", "/path2/file2.js"]));
        assert_eq!(names(&files), ["path1/file1.js", "path2/file2.js"]);
    }

    #[test]
    fn test_reduce_relative_names_without_shared_segment() {
        let files = reduce_common_prefix(self_mapped(&["a/x.js", "b/y.js"]));
        assert_eq!(names(&files), ["a/x.js", "b/y.js"]);
    }

    #[test]
    fn test_reduce_all_files_in_same_subdir() {
        let files = reduce_common_prefix(self_mapped(&[
            "/srv/models/admin/a.json",
            "/srv/models/admin/b.json",
        ]));
        assert_eq!(names(&files), ["a.json", "b.json"]);
    }

    #[test]
    fn test_reduce_keeps_final_segment_of_shortest() {
        let files = reduce_common_prefix(self_mapped(&["/p/a", "/p/a/b.js"]));
        assert_eq!(names(&files), ["a", "a/b.js"]);
    }

    #[test]
    fn test_strip_extensions() {
        let files: FileSet = [
            ("/path/file1.js", "file1.js"),
            ("/path/file2.txt", "file2.txt"),
            ("/path/file3.json", "file3.json"),
        ]
        .into_iter()
        .collect();
        assert_eq!(names(&strip_extensions(files)), ["file1", "file2", "file3"]);
    }

    #[test]
    fn test_strip_extensions_conflict_keeps_originals() {
        let files: FileSet = [("/p/file.js", "file.js"), ("/p/file.txt", "file.txt")]
            .into_iter()
            .collect();
        assert_eq!(names(&strip_extensions(files)), ["file.js", "file.txt"]);
    }

    #[test]
    fn test_strip_extensions_three_way_conflict() {
        let files: FileSet = [
            ("/p/a.json", "a.json"),
            ("/p/a.toml", "a.toml"),
            ("/p/a.hbs", "a.hbs"),
            ("/p/b.json", "b.json"),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            names(&strip_extensions(files)),
            ["a.json", "a.toml", "a.hbs", "b"]
        );
    }

    #[test]
    fn test_strip_extensions_without_extensions() {
        let files: FileSet = [
            ("/path/file1.js", "file1.js"),
            ("/path/file2", "file2"),
            ("/path/file3.txt", "file3.txt"),
        ]
        .into_iter()
        .collect();
        assert_eq!(names(&strip_extensions(files)), ["file1", "file2", "file3"]);
    }

    #[test]
    fn test_strip_extensions_nested_names() {
        let files: FileSet = [("/p/admin/users.json", "admin/users.json")]
            .into_iter()
            .collect();
        assert_eq!(names(&strip_extensions(files)), ["admin/users"]);
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("users.json"), ".json");
        assert_eq!(extension_of("admin/users.test.json"), ".json");
        assert_eq!(extension_of("a.dir/file"), "");
        assert_eq!(extension_of(".env"), "");
        assert_eq!(extension_of(""), "");
    }
}
