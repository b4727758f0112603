//! The set of words a game accepts and draws answers from

use super::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

/// Deduplicated set of valid lowercase words
///
/// Keeps a sorted list alongside the hash set so that drawing an answer
/// from a seeded rng is reproducible.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    sorted: Vec<Word>,
    lookup: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from already-validated words
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut sorted: Vec<Word> = words.into_iter().collect();
        sorted.sort();
        sorted.dedup();

        let lookup = sorted.iter().map(|w| w.text().to_string()).collect();

        Self { sorted, lookup }
    }

    /// Membership check on the lowercased form of `word`
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(&word.to_lowercase())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Words in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.sorted.iter()
    }

    /// Pick a word uniformly at random, `None` if empty
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.sorted.choose(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary::new(words.iter().map(|w| Word::new(w).unwrap()))
    }

    #[test]
    fn deduplicates_case_insensitively() {
        let dict = dictionary(&["crate", "CRATE", "trace"]);
        assert_eq!(dict.len(), 2);
        assert!(!dict.is_empty());
    }

    #[test]
    fn contains_is_case_insensitive() {
        let dict = dictionary(&["crate"]);
        assert!(dict.contains("crate"));
        assert!(dict.contains("CrAtE"));
        assert!(!dict.contains("zzzzz"));
    }

    #[test]
    fn iter_is_sorted() {
        let dict = dictionary(&["trace", "crate", "react"]);
        let words: Vec<&str> = dict.iter().map(Word::text).collect();
        assert_eq!(words, ["crate", "react", "trace"]);
    }

    #[test]
    fn choose_from_empty_is_none() {
        let dict = Dictionary::default();
        assert!(dict.is_empty());
        assert!(dict.choose(&mut StdRng::seed_from_u64(1)).is_none());
    }

    #[test]
    fn choose_is_reproducible_with_seed() {
        let dict = dictionary(&["crate", "react", "trace", "cater", "caret"]);
        let first = dict.choose(&mut StdRng::seed_from_u64(42)).cloned();
        let second = dict.choose(&mut StdRng::seed_from_u64(42)).cloned();
        assert_eq!(first, second);
        assert!(dict.contains(first.unwrap().text()));
    }

    #[test]
    fn choose_reaches_every_word() {
        let dict = dictionary(&["crate", "react", "trace"]);
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = FxHashSet::default();
        for _ in 0..200 {
            seen.insert(dict.choose(&mut rng).unwrap().text().to_string());
        }
        assert_eq!(seen.len(), 3);
    }
}
