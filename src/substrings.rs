use std::collections::BTreeSet;

/// Computes the set of all distinct contiguous substrings of `s`.
///
/// Lengths and offsets are counted in chars, so a substring never splits a code point. The empty
/// string yields the empty set; any other string is a member of its own substring set.
pub fn substrings(s: &str) -> BTreeSet<String> {
    // byte offsets of every char boundary, including the end of the string
    let bounds: Vec<usize> = s
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(s.len()))
        .collect();
    let n = bounds.len() - 1;

    let mut result = BTreeSet::new();
    for len in 1..n + 1 {
        for start in 0..n + 1 - len {
            result.insert(String::from(&s[bounds[start]..bounds[start + len]]));
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| String::from(*s)).collect()
    }

    #[test]
    fn empty() {
        assert!(substrings("").is_empty());
    }

    #[test]
    fn single_char() {
        assert_eq!(substrings("a"), set(&["a"]));
    }

    #[test]
    fn all_lengths_and_offsets() {
        assert_eq!(
            substrings("son"),
            set(&["s", "o", "n", "so", "on", "son"])
        );
    }

    #[test]
    fn duplicates_collapse() {
        // a, b, ab, ba, aba, bab, abab
        assert_eq!(substrings("abab").len(), 7);
        assert_eq!(substrings("aaaa"), set(&["a", "aa", "aaa", "aaaa"]));
    }

    #[test]
    fn contains_whole_string() {
        let s = "weather";
        let subs = substrings(s);
        assert!(subs.contains(s));
        assert!(subs.iter().all(|sub| s.contains(sub.as_str())));
    }

    #[test]
    fn multibyte_chars() {
        assert_eq!(
            substrings("héé"),
            set(&["h", "é", "hé", "éé", "héé"])
        );
    }
}
