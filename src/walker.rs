//! Document enumeration.
//!
//! The extraction merge rules are first-wins, so processing order decides
//! ties; the collected paths are sorted to pin that order across
//! filesystems.

use std::path::PathBuf;

use ignore::WalkBuilder;
use tracing::debug;

/// Recursively collect every file under the given roots, sorted by path.
/// Roots that are plain files are taken as-is; missing roots are skipped.
pub fn collect_files(roots: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for root in roots {
        if root.is_file() {
            files.push(root.clone());
            continue;
        }
        if !root.is_dir() {
            debug!("skipping missing directory {}", root.display());
            continue;
        }
        let walk = WalkBuilder::new(root).standard_filters(false).build();
        for entry in walk.flatten() {
            if entry.file_type().is_some_and(|t| t.is_file()) {
                files.push(entry.into_path());
            }
        }
    }
    files.sort();
    files
}
