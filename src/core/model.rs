//! Unified Result Model
//!
//! Every extraction run produces a [`ScanReport`] before anything is rendered.
//! The report carries the ranked word list together with the limits it was
//! computed with, so downstream consumers never need the original flags.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::core::config::{CaseMode, ChainMode};

/// Errors surfaced by the extraction pipeline
#[derive(Debug, Error)]
pub enum KeywordsError {
    /// The stopword or target directory does not exist or is not a directory
    #[error("invalid directory: {}", .0.display())]
    InvalidDirectory(PathBuf),

    /// A single file could not be read
    #[error("cannot read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl KeywordsError {
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        KeywordsError::FileRead {
            path: path.into(),
            source,
        }
    }
}

/// A word and the number of times it was seen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Top-N words, count descending, equal counts in lexicographic order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedList {
    /// Limit the list was truncated to
    pub max_count: usize,

    /// Number of distinct words before truncation
    pub distinct_words: usize,

    pub entries: Vec<WordCount>,
}

impl RankedList {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the count of a word that made it into the list
    #[cfg(test)]
    pub fn count_of(&self, word: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|entry| entry.word == word)
            .map(|entry| entry.count)
    }
}

impl<'a> IntoIterator for &'a RankedList {
    type Item = &'a WordCount;
    type IntoIter = std::slice::Iter<'a, WordCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// File tallies for one scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    /// Files that were tokenized
    pub files_scanned: usize,

    /// Files skipped because their content looked binary
    pub files_binary: usize,

    /// Files that failed to read
    pub files_failed: usize,

    /// Words counted after filtering, across all files
    pub words_counted: u64,
}

impl ScanStats {
    /// Sum two tallies (used when merging worker results)
    pub fn merge(self, other: ScanStats) -> ScanStats {
        ScanStats {
            files_scanned: self.files_scanned + other.files_scanned,
            files_binary: self.files_binary + other.files_binary,
            files_failed: self.files_failed + other.files_failed,
            words_counted: self.words_counted + other.words_counted,
        }
    }
}

/// Everything a finished extraction reports
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Scanned root, '/'-separated
    pub root: String,

    pub case: CaseMode,

    pub chain: ChainMode,

    /// Minimum word length in code points (0 = unlimited)
    pub min_len: usize,

    pub stats: ScanStats,

    pub ranked: RankedList,
}
