//! Word lists for the game
//!
//! Provides the embedded dictionary compiled into the binary, plus loading
//! from a newline-delimited file.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn dictionary_words_are_valid() {
        // Every entry should be 5 letters, lowercase
        for &word in DICTIONARY {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn dictionary_has_common_words() {
        for word in ["crate", "react", "plane", "about"] {
            assert!(DICTIONARY.contains(&word), "missing '{word}'");
        }
        assert!(!DICTIONARY.contains(&"zzzzz"));
    }
}
