//! Top-N ranking
//!
//! Entries are ordered by count descending. Equal counts are ordered by the
//! word itself, so the output never depends on hash map iteration order or
//! on the order in which files were visited.

use std::cmp::Ordering;
use std::num::NonZeroUsize;

use crate::core::model::{RankedList, WordCount};
use crate::words::counter::FrequencyCounter;

fn by_rank(a: &WordCount, b: &WordCount) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word))
}

/// Rank the counter and keep the first `max_count` entries
pub fn rank(counter: &FrequencyCounter, max_count: NonZeroUsize) -> RankedList {
    let max_count = max_count.get();
    let distinct_words = counter.len();
    if counter.is_empty() {
        return RankedList {
            max_count,
            distinct_words,
            entries: Vec::new(),
        };
    }

    let mut entries: Vec<WordCount> = counter
        .iter()
        .map(|(word, count)| WordCount::new(word, count))
        .collect();

    if entries.len() > max_count {
        // Only the head needs a full sort
        entries.select_nth_unstable_by(max_count - 1, by_rank);
        entries.truncate(max_count);
    }
    entries.sort_unstable_by(by_rank);

    RankedList {
        max_count,
        distinct_words,
        entries,
    }
}
