//! Path normalization utilities
//!
//! Paths shown in logs and reports use '/' as separator and are relative to
//! the scanned root.

use std::path::{Path, PathBuf};

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Relative display form of `path`, falling back to the full path
pub fn display_relative(path: &Path, root: &Path) -> String {
    make_relative(path, root).unwrap_or_else(|| normalize_path(path))
}

/// Resolve the target directory argument to an absolute path
///
/// Relative paths are taken from the current directory. Paths that cannot be
/// canonicalized are returned as given so the caller can report them.
pub fn resolve_dir(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
