//! Word frequency accumulation

use std::collections::HashMap;

/// Word -> occurrence count
///
/// A counter has a single owner. Parallel scans give each worker its own
/// counter and [`merge`](FrequencyCounter::merge) them afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyCounter {
    counts: HashMap<String, u64>,
}

impl FrequencyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every word in `words`, returning how many were added
    pub fn accumulate<I, S>(&mut self, words: I) -> u64
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0u64;
        for word in words {
            let word = word.as_ref();
            match self.counts.get_mut(word) {
                Some(count) => *count += 1,
                None => {
                    self.counts.insert(word.to_string(), 1);
                }
            }
            added += 1;
        }
        added
    }

    /// Sum another counter into this one
    pub fn merge(mut self, other: FrequencyCounter) -> FrequencyCounter {
        let (mut base, extra) = if self.counts.len() >= other.counts.len() {
            (std::mem::take(&mut self.counts), other.counts)
        } else {
            (other.counts, std::mem::take(&mut self.counts))
        };
        for (word, count) in extra {
            *base.entry(word).or_insert(0) += count;
        }
        FrequencyCounter { counts: base }
    }

    #[cfg(test)]
    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyCounter {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut counter = FrequencyCounter::new();
        counter.accumulate(iter);
        counter
    }
}
