//! Recursive discovery of Python source files
//!
//! Enumerates every `*.py` file under a root directory using the ignore
//! crate's walker. Hidden files and directories are skipped; VCS ignore files
//! are deliberately not consulted — the scanned tree is a platform mount, not
//! a developer checkout.

use ignore::WalkBuilder;
use ignore::types::TypesBuilder;
use std::path::{Path, PathBuf};

/// Enumerate every Python source file under `root`.
///
/// Returned paths are relative to `root`. Order is whatever the underlying
/// traversal yields; callers must not depend on it for correctness, only for
/// reproducibility of batch boundaries. Unreadable directory entries are
/// skipped silently.
pub fn walk(root: &Path) -> Vec<PathBuf> {
    let mut builder = TypesBuilder::new();
    // A single fixed suffix; the defaults' broader "py" type (e.g. *.pyi)
    // would over-match.
    if builder.add("python", "*.py").is_err() {
        return Vec::new();
    }
    builder.select("python");
    let Ok(types) = builder.build() else {
        return Vec::new();
    };

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(true)
        .types(types)
        .build();

    let mut files = Vec::new();
    for entry in walker.flatten() {
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        if let Ok(rel) = entry.path().strip_prefix(root) {
            files.push(rel.to_path_buf());
        }
    }
    files
}
