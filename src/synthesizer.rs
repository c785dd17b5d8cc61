//! Greedy synthesis of a discriminating pattern from labeled examples.
//!
//! Every substring of every example is collected. Substrings that occur in both a positive and a
//! negative example cannot tell the two apart, so they are discarded. Each positive example then
//! contributes its shortest surviving substring, or, if nothing survives, an exact match of its
//! whole text. The contributions are joined into a single alternation.
//!
//! The result is not the shortest possible pattern. It is only guaranteed to match every positive
//! example and no negative example, given disjoint inputs.

use crate::error::Result;
use crate::example::{Example, Polarity};
use crate::fragment::{self, Fragment};
use crate::validate::check_preconditions;
use std::collections::BTreeSet;

/// How to choose among several shortest discriminating substrings of the same example.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TieBreak {
    /// Choose the lexicographically smallest candidate.
    Lexicographic,
    /// Choose the candidate occurring earliest in the example text.
    Earliest,
}

impl Default for TieBreak {
    fn default() -> Self {
        TieBreak::Lexicographic
    }
}

/// Synthesis settings.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub struct Options {
    pub tie_break: TieBreak,
}

impl Options {
    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}

/// Holds the labeled examples of a single synthesis.
///
/// Positive examples come first, followed by negative examples, each in input order.
#[derive(Debug, Clone)]
pub struct Synthesizer {
    examples: Vec<Example>,
    options: Options,
}

impl Synthesizer {
    /// Builds one example per input word, using default options.
    ///
    /// No preconditions are checked here; see [`synthesize`] for the checked entry point.
    pub fn new<S0, S1>(positives: &[S0], negatives: &[S1]) -> Self
    where
        S0: AsRef<str>,
        S1: AsRef<str>,
    {
        Self::with_options(positives, negatives, Options::default())
    }

    pub fn with_options<S0, S1>(positives: &[S0], negatives: &[S1], options: Options) -> Self
    where
        S0: AsRef<str>,
        S1: AsRef<str>,
    {
        let examples = positives
            .iter()
            .map(|word| Example::positive(word.as_ref()))
            .chain(negatives.iter().map(|word| Example::negative(word.as_ref())))
            .collect();
        Self { examples, options }
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    pub fn options(&self) -> Options {
        self.options
    }

    fn with_polarity(&self, polarity: Polarity) -> impl Iterator<Item = &Example> {
        self.examples
            .iter()
            .filter(move |ex| ex.polarity() == polarity)
    }

    /// Union of the substring sets of all examples with the given polarity.
    pub fn union(&self, polarity: Polarity) -> BTreeSet<String> {
        self.with_polarity(polarity)
            .fold(BTreeSet::new(), |mut merged, ex| {
                merged.extend(ex.substrings().iter().cloned());
                merged
            })
    }

    /// Substrings occurring in at least one positive and at least one negative example.
    pub fn useless(&self) -> BTreeSet<String> {
        let positive = self.union(Polarity::Positive);
        let negative = self.union(Polarity::Negative);
        let useless: BTreeSet<String> = positive.intersection(&negative).cloned().collect();
        log::debug!(
            "substrings: {} positive, {} negative, {} useless",
            positive.len(),
            negative.len(),
            useless.len()
        );
        useless
    }

    /// Pairs every positive example with its substrings that are not useless.
    pub fn reduced(&self) -> Vec<(&Example, BTreeSet<String>)> {
        let useless = self.useless();
        self.with_polarity(Polarity::Positive)
            .map(|ex| (ex, ex.without(&useless)))
            .collect()
    }

    /// Selects one fragment per positive example, in input order.
    pub fn fragments(&self) -> Vec<Fragment> {
        self.reduced()
            .into_iter()
            .map(|(ex, reduced)| select(ex, &reduced, self.options.tie_break))
            .collect()
    }

    /// Joins the selected fragments into a single alternation.
    ///
    /// Duplicate fragments collapse and the order of alternatives is fixed. Without positive
    /// examples the pattern is empty.
    pub fn pattern(&self) -> String {
        let fragments: BTreeSet<Fragment> = self.fragments().into_iter().collect();
        fragment::join(&fragments)
    }
}

fn select(ex: &Example, reduced: &BTreeSet<String>, tie_break: TieBreak) -> Fragment {
    let best = match tie_break {
        // the set iterates in lexicographic order and min_by_key keeps the first minimum
        TieBreak::Lexicographic => reduced.iter().min_by_key(|s| s.chars().count()),
        TieBreak::Earliest => reduced
            .iter()
            .min_by_key(|s| (s.chars().count(), ex.text().find(s.as_str()))),
    };
    match best {
        Some(s) => {
            log::debug!("{:?}: selected {:?}", ex.text(), s);
            Fragment::Contains(s.clone())
        }
        None => {
            log::trace!(
                "{:?}: every substring occurs in a negative example, matching exactly",
                ex.text()
            );
            Fragment::Exact(String::from(ex.text()))
        }
    }
}

/// Synthesizes a pattern matching every positive word and no negative word.
///
/// The inputs are checked first: both lists must be non-empty, contain no empty words, and share
/// no words.
///
/// # Example
///
/// ```
/// use regex_golf::synthesize;
///
/// # fn main() -> regex_golf::Result<()> {
/// let pattern = synthesize(&["killer", "grass"], &["ill", "glass"])?;
/// assert_eq!(pattern, "e|r");
/// # Ok(())
/// # }
/// ```
pub fn synthesize<S0, S1>(positives: &[S0], negatives: &[S1]) -> Result<String>
where
    S0: AsRef<str>,
    S1: AsRef<str>,
{
    synthesize_with(positives, negatives, Options::default())
}

/// Same as [`synthesize`], with explicit options.
pub fn synthesize_with<S0, S1>(positives: &[S0], negatives: &[S1], options: Options) -> Result<String>
where
    S0: AsRef<str>,
    S1: AsRef<str>,
{
    check_preconditions(positives, negatives)?;
    let pattern = Synthesizer::with_options(positives, negatives, options).pattern();
    log::debug!("synthesized pattern {:?}", pattern);
    Ok(pattern)
}
