use crate::error::Result;
use regex::Regex;

/// A compiled pattern that can be tested against text.
pub trait Matcher {
    /// Returns true if the pattern matches anywhere in `text`.
    fn matches(&self, text: &str) -> bool;
}

/// A pattern engine, turning pattern text into a [`Matcher`].
///
/// The engine must support literal containment, `^`/`$` anchors and `|` alternation.
pub trait Engine {
    type Matcher: Matcher;

    fn compile(&self, pattern: &str) -> Result<Self::Matcher>;
}

/// The engine backed by the `regex` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegexEngine;

impl Engine for RegexEngine {
    type Matcher = Regex;

    fn compile(&self, pattern: &str) -> Result<Regex> {
        Ok(Regex::new(pattern)?)
    }
}

impl Matcher for Regex {
    fn matches(&self, text: &str) -> bool {
        self.is_match(text)
    }
}
