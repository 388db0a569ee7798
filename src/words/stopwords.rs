//! Stopword lists
//!
//! Every `.txt` file below the stopword directory contributes one entry per
//! line. Entries go through the same glue and case policy as scanned text so
//! that membership is an exact string match.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::core::model::KeywordsError;
use crate::words::normalize::Normalizer;

/// Immutable set of normalized stopwords
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// A set that filters nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from literal entries
    #[cfg(test)]
    pub fn from_words<I, S>(words: I, normalizer: &Normalizer) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::empty();
        for word in words {
            set.insert(word.as_ref(), normalizer);
        }
        set
    }

    /// Load every `.txt` word list below `dir`
    pub fn load(dir: &Path, normalizer: &Normalizer) -> Result<Self, KeywordsError> {
        if !dir.is_dir() {
            return Err(KeywordsError::InvalidDirectory(dir.to_path_buf()));
        }

        let mut set = Self::empty();
        let mut files = 0usize;

        for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    log::warn!("stopwords: {}", e);
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file() || !is_word_list(path) {
                continue;
            }

            let text =
                fs::read_to_string(path).map_err(|e| KeywordsError::file_read(path, e))?;
            for line in text.split(['\r', '\n']) {
                set.insert(line, normalizer);
            }
            files += 1;
            log::debug!("stopwords: loaded {}", path.display());
        }

        if set.is_empty() {
            log::warn!("stopwords: no entries found in {}", dir.display());
            return Ok(set);
        }
        log::info!(
            "stopwords: {} entries from {} file(s) in {}",
            set.len(),
            files,
            dir.display()
        );
        Ok(set)
    }

    fn insert(&mut self, entry: &str, normalizer: &Normalizer) {
        let entry = entry.trim();
        if entry.is_empty() {
            return;
        }
        self.words.insert(normalizer.normalize_stopword(entry));
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn is_word_list(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("txt"))
        .unwrap_or(false)
}
