//! Wordle word representation
//!
//! A Word stores a validated, lowercased 5-letter word as bytes for scoring.

use super::WORD_LENGTH;
use std::fmt;
use thiserror::Error;

/// A 5-letter lowercase ASCII word
///
/// Every guess and every answer is a `Word`; construction is the only place
/// format rules are checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LENGTH],
}

/// Which side of the required length a word falls on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthProblem {
    TooShort,
    TooLong,
}

impl fmt::Display for LengthProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(f, "too short"),
            Self::TooLong => write!(f, "too long"),
        }
    }
}

/// The first offending character class found in a word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterProblem {
    /// At least one ASCII digit
    Digits,
    /// Something that is neither a digit nor an ASCII letter
    Disallowed(char),
}

impl fmt::Display for CharacterProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digits => write!(f, "it contains digits"),
            Self::Disallowed(c) => write!(f, "it has characters that are not allowed ({c:?})"),
        }
    }
}

/// Error type for malformed words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word is {problem}: expected {expected} letters, got {found}", expected = WORD_LENGTH)]
    InvalidLength { problem: LengthProblem, found: usize },
    #[error("word is invalid because {0}")]
    InvalidCharacters(CharacterProblem),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Checks run in a fixed order: length (in characters), then digits,
    /// then any other non-letter. The stored text is lowercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 characters
    /// - Contains a digit
    /// - Contains anything else that is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("CrAtE").unwrap();
    /// assert_eq!(word.text(), "crate");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        let found = text.chars().count();
        if found != WORD_LENGTH {
            let problem = if found < WORD_LENGTH {
                LengthProblem::TooShort
            } else {
                LengthProblem::TooLong
            };
            return Err(WordError::InvalidLength { problem, found });
        }

        if text.chars().any(|c| c.is_ascii_digit()) {
            return Err(WordError::InvalidCharacters(CharacterProblem::Digits));
        }

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters(CharacterProblem::Disallowed(
                bad,
            )));
        }

        // All characters are ASCII here, so bytes and chars line up
        let text = text.to_ascii_lowercase();
        let mut letters = [0u8; WORD_LENGTH];
        letters.copy_from_slice(text.as_bytes());

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }

    /// Count how many times a letter occurs
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.letters.iter().filter(|&&l| l == letter).count()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crate").unwrap();
        assert_eq!(word.text(), "crate");
        assert_eq!(word.letters(), b"crate");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(Word::new("CRATE").unwrap().text(), "crate");
        assert_eq!(Word::new("CrAtE").unwrap().text(), "crate");
    }

    #[test]
    fn word_creation_too_short() {
        assert_eq!(
            Word::new("cat"),
            Err(WordError::InvalidLength {
                problem: LengthProblem::TooShort,
                found: 3
            })
        );
        assert!(matches!(
            Word::new(""),
            Err(WordError::InvalidLength { found: 0, .. })
        ));
    }

    #[test]
    fn word_creation_too_long_checked_before_characters() {
        // Digit present, but the length rule fires first
        assert_eq!(
            Word::new("plane1"),
            Err(WordError::InvalidLength {
                problem: LengthProblem::TooLong,
                found: 6
            })
        );
    }

    #[test]
    fn word_length_counts_characters_not_bytes() {
        // 'é' is two bytes but one character
        assert_eq!(
            Word::new("café!"),
            Err(WordError::InvalidCharacters(CharacterProblem::Disallowed(
                'é'
            )))
        );
    }

    #[test]
    fn word_creation_digits_reported_before_other_characters() {
        assert_eq!(
            Word::new("AB3de"),
            Err(WordError::InvalidCharacters(CharacterProblem::Digits))
        );
        // Punctuation comes first in the string, digits still win
        assert_eq!(
            Word::new("!b3de"),
            Err(WordError::InvalidCharacters(CharacterProblem::Digits))
        );
    }

    #[test]
    fn word_creation_disallowed_characters() {
        assert_eq!(
            Word::new("cra e"),
            Err(WordError::InvalidCharacters(CharacterProblem::Disallowed(
                ' '
            )))
        );
        assert!(Word::new("cran!").is_err());
    }

    #[test]
    fn word_error_messages_name_the_problem() {
        let short = Word::new("cat").unwrap_err().to_string();
        assert!(short.contains("too short"), "{short}");

        let long = Word::new("planet").unwrap_err().to_string();
        assert!(long.contains("too long"), "{long}");

        let digits = Word::new("cr4te").unwrap_err().to_string();
        assert!(digits.contains("digits"), "{digits}");
    }

    #[test]
    fn word_letter_queries() {
        let word = Word::new("geese").unwrap();
        assert_eq!(word.letter_at(0), b'g');
        assert!(word.has_letter(b's'));
        assert!(!word.has_letter(b'z'));
        assert_eq!(word.count_of(b'e'), 3);
        assert_eq!(word.count_of(b'z'), 0);
    }

    #[test]
    fn word_display() {
        let word = Word::new("crate").unwrap();
        assert_eq!(format!("{word}"), "crate");
    }

    #[test]
    fn word_equality_is_case_insensitive() {
        assert_eq!(Word::new("crate").unwrap(), Word::new("CRATE").unwrap());
        assert_ne!(Word::new("crate").unwrap(), Word::new("trace").unwrap());
    }
}
