//! Synthesis of discriminating regular expressions from examples.
//!
//! Given a list of words that a pattern must match and a list of words that it must not match,
//! this crate builds a regular expression separating the two, in the spirit of [regex
//! golf](https://xkcd.com/1313/). For example, the pattern learned from the words in the
//! following table matches every word in the first row and none of the words in the second row:
//!
//! | | | | | | |
//! |---|---|---|---|---|---|
//! | Match | youth | son | killer | grass | weather |
//! | No match | you | nickson | ill | glass | water |
//!
//! The following example shows how to synthesize a pattern with [synthesize] and check it against
//! the examples with [validate_regex].
//!
//! ```
//! use regex_golf::{synthesize, validate_regex};
//!
//! # fn main() -> regex_golf::Result<()> {
//! let positives = ["youth", "son", "killer", "grass", "weather"];
//! let negatives = ["you", "nickson", "ill", "glass", "water"];
//!
//! // synthesize returns an error if the lists are empty, contain empty words, or overlap
//! let pattern = synthesize(&positives, &negatives)?;
//! assert_eq!(pattern, "gr|h|ki|^son$");
//!
//! let validation = validate_regex(&pattern, &positives, &negatives)?;
//! assert!(validation.is_success());
//! # Ok(())
//! # }
//! ```
//!
//! The synthesis is greedy: each positive word contributes its shortest substring that occurs in
//! no negative word, or an exact match of the whole word when there is no such substring. The
//! resulting pattern is correct for disjoint inputs, but it is not necessarily the shortest one.

#![doc(html_root_url = "https://docs.rs/regex-golf/0.1.0")]

pub mod error;
pub mod example;
pub mod fragment;
pub mod matcher;
pub mod substrings;
pub mod synthesizer;
pub mod validate;

pub use error::{Error, Result};
pub use example::{Example, Polarity};
pub use fragment::Fragment;
pub use matcher::{Engine, Matcher, RegexEngine};
pub use synthesizer::{synthesize, synthesize_with, Options, Synthesizer, TieBreak};
pub use validate::{check_preconditions, validate, validate_regex, Mismatch, Validation};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_to_end() {
        let positives = vec![
            String::from("youth"),
            String::from("son"),
            String::from("killer"),
            String::from("grass"),
            String::from("weather"),
        ];
        let negatives = vec!["you", "nickson", "ill", "glass", "water"];
        let pattern = synthesize(&positives, &negatives).unwrap();
        let validation = validate_regex(&pattern, &positives, &negatives).unwrap();
        assert!(validation.is_success());
    }

    #[test]
    fn end_to_end_earliest() {
        let positives = ["youth", "son", "killer", "grass", "weather"];
        let negatives = ["you", "nickson", "ill", "glass", "water"];
        let options = Options::default().tie_break(TieBreak::Earliest);
        let pattern = synthesize_with(&positives, &negatives, options).unwrap();
        // "ki" precedes "le" in "killer", "gr" precedes "ra" in "grass"
        assert_eq!(pattern, "gr|h|ki|^son$");
        assert!(validate_regex(&pattern, &positives, &negatives)
            .unwrap()
            .is_success());
    }

    #[test]
    fn end_to_end_exact_matches() {
        let positives = ["a", "b"];
        let negatives = ["ab", "ba"];
        let pattern = synthesize(&positives, &negatives).unwrap();
        assert_eq!(pattern, "^a$|^b$");
        assert!(validate_regex(&pattern, &positives, &negatives)
            .unwrap()
            .is_success());
    }

    #[test]
    fn rejections() {
        assert!(matches!(
            synthesize(&["cat"], &["cat"]),
            Err(Error::Overlap { .. })
        ));
        assert!(matches!(
            synthesize::<&str, _>(&[], &["dog"]),
            Err(Error::EmptyList {
                polarity: Polarity::Positive
            })
        ));
    }
}
