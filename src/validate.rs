//! Input checks and verification of synthesized patterns.

use crate::error::{Error, Result};
use crate::example::Polarity;
use crate::matcher::{Engine, Matcher, RegexEngine};
use std::collections::BTreeSet;
use std::fmt;

/// Rejects inputs for which synthesis cannot guarantee a correct pattern.
///
/// Both lists must be non-empty and free of empty words, and no word may appear in both lists.
/// Emptiness is checked before overlap.
pub fn check_preconditions<S0, S1>(positives: &[S0], negatives: &[S1]) -> Result<()>
where
    S0: AsRef<str>,
    S1: AsRef<str>,
{
    check_non_empty(positives, Polarity::Positive)?;
    check_non_empty(negatives, Polarity::Negative)?;

    let positives: BTreeSet<&str> = positives.iter().map(|w| w.as_ref()).collect();
    let negatives: BTreeSet<&str> = negatives.iter().map(|w| w.as_ref()).collect();
    let shared: Vec<String> = positives
        .intersection(&negatives)
        .map(|w| String::from(*w))
        .collect();
    if !shared.is_empty() {
        return Err(Error::Overlap { words: shared });
    }
    Ok(())
}

fn check_non_empty<S: AsRef<str>>(words: &[S], polarity: Polarity) -> Result<()> {
    if words.is_empty() {
        return Err(Error::EmptyList { polarity });
    }
    match words.iter().position(|w| w.as_ref().is_empty()) {
        Some(index) => Err(Error::EmptyWord { polarity, index }),
        None => Ok(()),
    }
}

/// A word the pattern got wrong.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Mismatch {
    pub word: String,
    pub polarity: Polarity,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.polarity {
            Polarity::Positive => write!(f, "{:?} failed: expected a match", self.word),
            Polarity::Negative => write!(f, "{:?} failed: expected no match", self.word),
        }
    }
}

/// Outcome of checking a pattern against every example word.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Validation {
    pub mismatches: Vec<Mismatch>,
}

impl Validation {
    /// Returns true if every positive word matched and no negative word did.
    pub fn is_success(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Checks that `pattern` matches every positive word and none of the negative words.
///
/// Input errors and compile errors are returned as errors. Words the pattern gets wrong are not:
/// every word is checked and the mismatches are collected in the returned [`Validation`].
pub fn validate<S0, S1, E>(
    pattern: &str,
    positives: &[S0],
    negatives: &[S1],
    engine: &E,
) -> Result<Validation>
where
    S0: AsRef<str>,
    S1: AsRef<str>,
    E: Engine,
{
    check_preconditions(positives, negatives)?;
    let matcher = engine.compile(pattern)?;

    let positives = positives.iter().map(|w| (w.as_ref(), Polarity::Positive));
    let negatives = negatives.iter().map(|w| (w.as_ref(), Polarity::Negative));
    let mut validation = Validation::default();
    for (word, polarity) in positives.chain(negatives) {
        let expected = polarity == Polarity::Positive;
        if matcher.matches(word) != expected {
            let mismatch = Mismatch {
                word: String::from(word),
                polarity,
            };
            log::warn!("{}", mismatch);
            validation.mismatches.push(mismatch);
        }
    }

    if validation.is_success() {
        log::info!("pattern {:?} separates all examples", pattern);
    } else {
        log::info!(
            "pattern {:?} failed on {} word(s)",
            pattern,
            validation.mismatches.len()
        );
    }
    Ok(validation)
}

/// Same as [`validate`], using the `regex` crate as the engine.
pub fn validate_regex<S0, S1>(pattern: &str, positives: &[S0], negatives: &[S1]) -> Result<Validation>
where
    S0: AsRef<str>,
    S1: AsRef<str>,
{
    validate(pattern, positives, negatives, &RegexEngine)
}
