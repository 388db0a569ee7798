//! File scanning backend
//!
//! Uses the ignore crate for traversal. By default every file below the
//! root is listed, dotfiles, ignored paths and symlinked files included.

use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

use crate::core::model::KeywordsError;

/// Traversal options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Skip hidden files and directories
    pub skip_hidden: bool,

    /// Honor .gitignore, .ignore and global git excludes
    pub respect_ignore: bool,

    /// Maximum directory depth from the root
    pub max_depth: Option<usize>,
}

/// List every file below `root`, sorted by path
pub fn scan_files(root: &Path, options: &ScanOptions) -> Result<Vec<PathBuf>, KeywordsError> {
    if !root.is_dir() {
        return Err(KeywordsError::InvalidDirectory(root.to_path_buf()));
    }

    let mut builder = WalkBuilder::new(root);
    builder
        .hidden(options.skip_hidden)
        .parents(options.respect_ignore)
        .ignore(options.respect_ignore)
        .git_ignore(options.respect_ignore)
        .git_global(options.respect_ignore)
        .git_exclude(options.respect_ignore)
        .require_git(false)
        .follow_links(true)
        .max_depth(options.max_depth);

    let mut files = Vec::new();

    for entry in builder.build() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::warn!("scan: {}", e);
                continue;
            }
        };

        if entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}
