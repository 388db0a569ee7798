//! Words module - the keyword extraction pipeline
//!
//! Provides:
//! - normalize: glue, letter-only reduction and case folding
//! - stopwords: stopword list loading
//! - tokenize: word splitting and filtering
//! - counter: frequency accumulation
//! - rank: deterministic top-N ranking

pub mod counter;
pub mod normalize;
pub mod rank;
pub mod stopwords;
pub mod tokenize;
