use std::fmt;

/// The alternation operator placed between fragments.
pub const ALTERNATION: &str = "|";

/// One alternative of a synthesized pattern.
#[derive(Debug, PartialEq, Eq, Clone, Hash, PartialOrd, Ord)]
pub enum Fragment {
    /// Matches any text containing the literal.
    Contains(String),
    /// Matches only text equal to the literal.
    Exact(String),
}

impl Fragment {
    /// The literal text this fragment is built from.
    pub fn literal(&self) -> &str {
        match self {
            Fragment::Contains(s) | Fragment::Exact(s) => s,
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, Fragment::Exact(_))
    }

    /// Renders the fragment in regular expression syntax.
    ///
    /// The literal is escaped, so metacharacters in example words keep their literal meaning.
    pub fn to_regex(&self) -> String {
        match self {
            Fragment::Contains(s) => regex::escape(s),
            Fragment::Exact(s) => format!("^{}$", regex::escape(s)),
        }
    }

    /// Evaluates the fragment directly, without going through a regex engine.
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Fragment::Contains(s) => text.contains(s.as_str()),
            Fragment::Exact(s) => text == s,
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_regex())
    }
}

/// Joins fragments into a single alternation.
pub fn join<'a>(fragments: impl IntoIterator<Item = &'a Fragment>) -> String {
    fragments
        .into_iter()
        .map(Fragment::to_regex)
        .collect::<Vec<_>>()
        .join(ALTERNATION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Fragment::*;

    #[test]
    fn render() {
        assert_eq!(Contains(String::from("th")).to_regex(), "th");
        assert_eq!(Exact(String::from("son")).to_regex(), "^son$");
    }

    #[test]
    fn render_escapes_metacharacters() {
        assert_eq!(Contains(String::from("a.b")).to_regex(), r"a\.b");
        assert_eq!(Exact(String::from("(x)")).to_regex(), r"^\(x\)$");
    }

    #[test]
    fn direct_matching() {
        let c = Contains(String::from("ill"));
        assert!(c.matches("killer"));
        assert!(!c.matches("glass"));
        let e = Exact(String::from("son"));
        assert!(e.matches("son"));
        assert!(!e.matches("nickson"));
        assert!(e.is_exact());
        assert_eq!(e.literal(), "son");
    }

    #[test]
    fn join_alternation() {
        let fragments = vec![Contains(String::from("k")), Exact(String::from("son"))];
        assert_eq!(join(&fragments), "k|^son$");
        assert_eq!(join(&Vec::<Fragment>::new()), "");
    }
}
