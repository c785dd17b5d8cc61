// third-party imports
use thiserror::Error;

// local imports
use crate::example::Polarity;

/// Error is an error which may occur while synthesizing or validating a pattern.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{polarity} example list is empty")]
    EmptyList { polarity: Polarity },
    #[error("{polarity} example {index} is an empty string")]
    EmptyWord { polarity: Polarity, index: usize },
    #[error("words {words:?} appear in both positive and negative examples")]
    Overlap { words: Vec<String> },
    #[error("failed to compile pattern: {0}")]
    PatternCompile(#[from] regex::Error),
    #[error("failed to compile pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl Error {
    /// Returns true for errors caused by empty input, either an empty list or an empty word.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Error::EmptyList { .. } | Error::EmptyWord { .. })
    }

    /// Returns true for errors caused by a pattern that could not be compiled.
    pub fn is_pattern_compile(&self) -> bool {
        matches!(self, Error::PatternCompile(_) | Error::InvalidPattern { .. })
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
