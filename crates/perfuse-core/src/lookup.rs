//! Recursive file lookup by name fragment.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Searches `root` recursively for the first entry whose file name contains
/// `needle`.
///
/// A matching file always wins over a matching directory; when only
/// directories match, the first one encountered is returned. Returns `None`
/// when nothing under `root` matches.
pub fn find_path(root: impl AsRef<Path>, needle: &str) -> Option<PathBuf> {
    let mut dir_match: Option<PathBuf> = None;
    for entry in WalkDir::new(root)
        .min_depth(1)
        .contents_first(true)
        .into_iter()
        .filter_map(Result::ok)
    {
        if !entry.file_name().to_string_lossy().contains(needle) {
            continue;
        }
        if entry.file_type().is_dir() {
            if dir_match.is_none() {
                dir_match = Some(entry.into_path());
            }
        } else {
            return Some(entry.into_path());
        }
    }
    dir_match
}
