//! Tokenizer - splits normalized text into countable words

use crate::core::config::ChainMode;
use crate::words::stopwords::StopwordSet;

/// Word filter settings shared by every file of a scan
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'s> {
    stopwords: &'s StopwordSet,
    /// Minimum length in code points; 0 disables the check
    min_len: usize,
    chain: ChainMode,
}

impl<'s> Tokenizer<'s> {
    pub fn new(stopwords: &'s StopwordSet, min_len: usize, chain: ChainMode) -> Self {
        Self {
            stopwords,
            min_len,
            chain,
        }
    }

    /// Lazily yield the words of `normalized` that survive filtering
    pub fn tokenize<'t>(&self, normalized: &'t str) -> impl Iterator<Item = &'t str> + 't
    where
        's: 't,
    {
        let this: Tokenizer<'t> = *self;
        let split_compounds = this.chain == ChainMode::Split;

        normalized
            .split(move |c: char| c == ' ' || (split_compounds && c == '_'))
            .map(|candidate| candidate.trim_matches('_'))
            .filter(move |word| this.keep(word))
    }

    fn keep(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        if self.min_len > 0 && word.chars().count() < self.min_len {
            return false;
        }
        !self.stopwords.contains(word)
    }
}

/// Convenience wrapper for one-off tokenization
#[cfg(test)]
pub fn tokenize<'t>(
    normalized: &'t str,
    stopwords: &'t StopwordSet,
    min_len: usize,
    chain: ChainMode,
) -> impl Iterator<Item = &'t str> + 't {
    Tokenizer::new(stopwords, min_len, chain).tokenize(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::CaseMode;
    use crate::words::normalize::Normalizer;
    use proptest::prelude::*;

    fn stopwords(words: &[&str]) -> StopwordSet {
        StopwordSet::from_words(words, &Normalizer::new(CaseMode::Lower))
    }

    #[test]
    fn test_tokenize_scenario() {
        let stop = stopwords(&["the"]);
        let words: Vec<_> = tokenize(
            "the quick_brown fox the fox ran ",
            &stop,
            3,
            ChainMode::Join,
        )
        .collect();
        assert_eq!(words, vec!["quick_brown", "fox", "fox", "ran"]);
    }

    #[test]
    fn test_min_len_zero_keeps_short_words() {
        let stop = StopwordSet::empty();
        let words: Vec<_> = tokenize("a bb ccc ccc", &stop, 0, ChainMode::Join).collect();
        assert_eq!(words, vec!["a", "bb", "ccc", "ccc"]);
    }

    #[test]
    fn test_min_len_counts_code_points() {
        let stop = StopwordSet::empty();
        // "день" is 4 code points but 8 bytes
        let words: Vec<_> = tokenize("день ok", &stop, 4, ChainMode::Join).collect();
        assert_eq!(words, vec!["день"]);
    }

    #[test]
    fn test_edge_underscores_are_trimmed() {
        let stop = StopwordSet::empty();
        let words: Vec<_> = tokenize("_ _lead trail_ mid_dle", &stop, 0, ChainMode::Join).collect();
        assert_eq!(words, vec!["lead", "trail", "mid_dle"]);
    }

    #[test]
    fn test_split_chain_mode() {
        let stop = stopwords(&["of"]);
        let words: Vec<_> =
            tokenize("state_of_the_art quick_brown", &stop, 0, ChainMode::Split).collect();
        assert_eq!(words, vec!["state", "the", "art", "quick", "brown"]);
    }

    #[test]
    fn test_glued_stopword_matches_compound() {
        let stop = stopwords(&["well-known"]);
        let words: Vec<_> = tokenize("well_known fact", &stop, 0, ChainMode::Join).collect();
        assert_eq!(words, vec!["fact"]);
    }

    #[test]
    fn test_tokenizer_is_reusable_across_files() {
        let stop = stopwords(&["and"]);
        let tokenizer = Tokenizer::new(&stop, 2, ChainMode::Join);
        assert_eq!(tokenizer.tokenize("cats and dogs").count(), 2);
        assert_eq!(tokenizer.tokenize("x and y").count(), 0);
    }

    proptest! {
        #[test]
        fn prop_only_filtered_words_yield_nothing(
            words in prop::collection::vec(
                prop_oneof![Just("the"), Just("and"), Just("a"), Just("of"), Just("xy")],
                0..30,
            )
        ) {
            let stop = stopwords(&["the", "and"]);
            let text = words.join(" ");
            prop_assert_eq!(tokenize(&text, &stop, 3, ChainMode::Join).count(), 0);
        }
    }
}
