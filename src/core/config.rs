//! Extraction configuration
//!
//! Raw option strings are validated once, here. Anything that fails
//! validation falls back to its documented default and produces a
//! [`ConfigWarning`] instead of aborting the run.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;
use thiserror::Error;

/// Minimum word length used when the configured value is invalid (no limit)
pub const FALLBACK_MIN_LEN: usize = 0;

/// Maximum result count used when the configured value is invalid
pub const FALLBACK_MAX_COUNT: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(n) => n,
    None => unreachable!(),
};

/// Case policy applied to both scanned text and stopwords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    /// Fold every word to lowercase
    #[default]
    Lower,
    /// Keep the original case
    Original,
}

impl CaseMode {
    pub fn available() -> &'static [&'static str] {
        &["lower", "original"]
    }

    /// Apply the case policy to already normalized text
    pub fn apply(self, text: String) -> String {
        match self {
            CaseMode::Lower => text.to_lowercase(),
            CaseMode::Original => text,
        }
    }
}

impl fmt::Display for CaseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CaseMode::Lower => "lower",
            CaseMode::Original => "original",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for CaseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lower" | "lowercase" => Ok(CaseMode::Lower),
            "original" | "preserve" => Ok(CaseMode::Original),
            _ => Err(format!(
                "Unknown case mode: {}. Available: {}",
                s,
                CaseMode::available().join(", ")
            )),
        }
    }
}

/// How glued compounds such as `well_known` are counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainMode {
    /// Count the compound as one word
    #[default]
    Join,
    /// Count each part of the compound separately
    Split,
}

impl ChainMode {
    pub fn available() -> &'static [&'static str] {
        &["join", "split"]
    }
}

impl fmt::Display for ChainMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChainMode::Join => "join",
            ChainMode::Split => "split",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ChainMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "join" => Ok(ChainMode::Join),
            "split" => Ok(ChainMode::Split),
            _ => Err(format!(
                "Unknown chain mode: {}. Available: {}",
                s,
                ChainMode::available().join(", ")
            )),
        }
    }
}

/// A configuration value that was replaced by its default
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigWarning {
    #[error("invalid minimum word length {value:?}, using {fallback}")]
    MinLen { value: String, fallback: usize },

    #[error("invalid maximum word count {value:?}, using {fallback}")]
    MaxCount { value: String, fallback: usize },

    #[error("{message}, using {fallback}")]
    Case { message: String, fallback: CaseMode },

    #[error("{message}, using {fallback}")]
    Chain {
        message: String,
        fallback: ChainMode,
    },
}

/// Options as they arrive from the command line
#[derive(Debug, Clone, Default)]
pub struct RawOptions {
    pub case: String,
    pub chain: String,
    pub min_len: String,
    pub max_count: String,
}

/// Validated extraction settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractConfig {
    pub case: CaseMode,
    pub chain: ChainMode,
    /// Minimum word length in code points (0 = unlimited)
    pub min_len: usize,
    pub max_count: NonZeroUsize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            case: CaseMode::default(),
            chain: ChainMode::default(),
            min_len: 3,
            max_count: FALLBACK_MAX_COUNT,
        }
    }
}

impl ExtractConfig {
    /// Validate raw options, substituting defaults for anything invalid
    pub fn from_raw(raw: &RawOptions) -> (Self, Vec<ConfigWarning>) {
        let mut warnings = Vec::new();

        let case = raw.case.parse().unwrap_or_else(|message| {
            let fallback = CaseMode::default();
            warnings.push(ConfigWarning::Case { message, fallback });
            fallback
        });

        let chain = raw.chain.parse().unwrap_or_else(|message| {
            let fallback = ChainMode::default();
            warnings.push(ConfigWarning::Chain { message, fallback });
            fallback
        });

        let min_len = parse_min_len(&raw.min_len).unwrap_or_else(|| {
            warnings.push(ConfigWarning::MinLen {
                value: raw.min_len.clone(),
                fallback: FALLBACK_MIN_LEN,
            });
            FALLBACK_MIN_LEN
        });

        let max_count = parse_max_count(&raw.max_count).unwrap_or_else(|| {
            warnings.push(ConfigWarning::MaxCount {
                value: raw.max_count.clone(),
                fallback: FALLBACK_MAX_COUNT.get(),
            });
            FALLBACK_MAX_COUNT
        });

        (
            Self {
                case,
                chain,
                min_len,
                max_count,
            },
            warnings,
        )
    }
}

/// Parse a non-negative integer
pub fn parse_min_len(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok()
}

/// Parse a positive integer
pub fn parse_max_count(value: &str) -> Option<NonZeroUsize> {
    value.trim().parse::<NonZeroUsize>().ok()
}
