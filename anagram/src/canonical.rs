use std::fmt;
use std::ops::Deref;

/// The anagram-equivalence class of a word: its ASCII letters, lowercased and sorted.
/// Two words are anagrams of each other iff their keys compare equal.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    pub fn new(word: &str) -> Self {
        let mut letters: Vec<u8> = filter_letters(word).into_bytes();
        letters.sort_unstable();
        // Only ASCII letters survive filtering, so any byte order is valid UTF-8
        CanonicalKey(letters.into_iter().map(char::from).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Deref for CanonicalKey {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CanonicalKey {
    fn from(word: &str) -> Self {
        CanonicalKey::new(word)
    }
}

impl fmt::Debug for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strip everything but `A-Z`/`a-z` and lowercase what remains, keeping the original order.
/// This is the form a word is stored in.
pub fn filter_letters(word: &str) -> String {
    word.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

pub fn canonicalize(word: &str) -> CanonicalKey {
    CanonicalKey::new(word)
}

/// True if both words have at least one letter and share the same letter multiset
pub fn is_anagram(a: &str, b: &str) -> bool {
    let a = canonicalize(a);
    !a.is_empty() && a == canonicalize(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_keeps_order() {
        assert_eq!(filter_letters("Listen!"), "listen");
        assert_eq!(filter_letters("O'Brien-Smith 3rd"), "obriensmithrd");
        assert_eq!(filter_letters("123 ..."), "");
        assert_eq!(filter_letters(""), "");
    }

    #[test]
    fn non_ascii_letters_are_dropped() {
        assert_eq!(filter_letters("café"), "caf");
        assert_eq!(canonicalize("naïve").as_str(), "aenv");
    }

    #[test]
    fn canonical_form_is_sorted() {
        assert_eq!(canonicalize("Listen!").as_str(), "eilnst");
        assert_eq!(canonicalize("tops"), canonicalize("STOP"));
        assert_eq!(format!("{:?}", canonicalize("cab")), "<abc>");
        assert!(canonicalize("42").is_empty());
    }

    #[test]
    fn anagram_pairs() {
        assert!(is_anagram("enlist", "inlets"));
        assert!(is_anagram("Dormitory", "dirty room!"));
        assert!(!is_anagram("cat", "cart"));
        assert!(!is_anagram("", ""));
        assert!(!is_anagram("!!", "??"));
    }
}
