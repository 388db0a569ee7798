//! Text normalization
//!
//! Raw file text goes through three steps, in this order:
//! 1. union-glue: runs of `_`/`-` become a single `_`
//! 2. letter-only reduction: anything that is not a letter or `_` becomes a single space
//! 3. optional case folding
//!
//! Gluing has to run first, otherwise the hyphen in `well-known` would be
//! turned into a word boundary by step 2.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

use crate::core::config::CaseMode;

static GLUE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[_-]+").expect("Invalid GLUE_RE regex"));

static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Invalid WHITESPACE_RE regex"));

static NON_LETTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}_]+").expect("Invalid NON_LETTER_RE regex"));

/// Collapse every run of `_` or `-` into a single `_`
pub fn glue_union(text: &str) -> Cow<'_, str> {
    GLUE_RE.replace_all(text, "_")
}

/// Replace every run of whitespace or non-letter characters with one space
pub fn keep_letters_only(text: &str) -> String {
    let spaced = WHITESPACE_RE.replace_all(text, " ");
    NON_LETTER_RE.replace_all(&spaced, " ").into_owned()
}

/// Applies the normalization pipeline with a fixed case policy
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    case: CaseMode,
}

impl Normalizer {
    pub fn new(case: CaseMode) -> Self {
        Self { case }
    }

    /// Normalize raw file text into space separated words
    pub fn normalize(&self, raw: &str) -> String {
        let glued = glue_union(raw);
        self.case.apply(keep_letters_only(&glued))
    }

    /// Normalize a stopword entry; it is glued and case-processed but keeps
    /// every other character so entries match tokens verbatim
    pub fn normalize_stopword(&self, entry: &str) -> String {
        self.case.apply(glue_union(entry).into_owned())
    }
}
