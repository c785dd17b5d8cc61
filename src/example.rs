use crate::substrings::substrings;
use std::collections::BTreeSet;
use std::fmt;

/// Which input list an example was drawn from.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub enum Polarity {
    /// The synthesized pattern must match the example.
    Positive,
    /// The synthesized pattern must not match the example.
    Negative,
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarity::Positive => write!(f, "positive"),
            Polarity::Negative => write!(f, "negative"),
        }
    }
}

/// A labeled example word along with its cached substring set.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Example {
    text: String,
    polarity: Polarity,
    substrings: BTreeSet<String>,
}

impl Example {
    /// Creates an example, computing its substring set once.
    ///
    /// Empty text is accepted here and yields an empty substring set; rejecting empty input is up
    /// to the caller.
    pub fn new(text: impl Into<String>, polarity: Polarity) -> Self {
        let text = text.into();
        let substrings = substrings(&text);
        Self {
            text,
            polarity,
            substrings,
        }
    }

    pub fn positive(text: impl Into<String>) -> Self {
        Self::new(text, Polarity::Positive)
    }

    pub fn negative(text: impl Into<String>) -> Self {
        Self::new(text, Polarity::Negative)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub fn substrings(&self) -> &BTreeSet<String> {
        &self.substrings
    }

    /// Returns this example's substrings minus everything in `removed`.
    pub fn without(&self, removed: &BTreeSet<String>) -> BTreeSet<String> {
        self.substrings.difference(removed).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caches_substrings() {
        let ex = Example::positive("son");
        assert_eq!(ex.text(), "son");
        assert_eq!(ex.polarity(), Polarity::Positive);
        assert_eq!(ex.substrings().len(), 6);
    }

    #[test]
    fn empty_text() {
        let ex = Example::negative("");
        assert_eq!(ex.polarity(), Polarity::Negative);
        assert!(ex.substrings().is_empty());
    }

    #[test]
    fn without_leaves_original_intact() {
        let ex = Example::positive("son");
        let removed = substrings("nickson");
        assert!(ex.without(&removed).is_empty());
        assert_eq!(ex.substrings().len(), 6);

        let removed = substrings("you");
        let reduced = ex.without(&removed);
        assert!(!reduced.contains("o"));
        assert!(reduced.contains("s"));
        assert!(reduced.contains("son"));
    }
}
