//! Core domain types for Wordle
//!
//! Words, per-position feedback, alphabet knowledge and the dictionary.
//! Everything here is pure data with no I/O.

mod dictionary;
mod feedback;
mod knowledge;
mod word;

pub use dictionary::Dictionary;
pub use feedback::{Feedback, LetterResult, ScoringPolicy};
pub use knowledge::AlphabetKnowledge;
pub use word::{CharacterProblem, LengthProblem, Word, WordError};

/// Letters in every guess and answer
pub const WORD_LENGTH: usize = 5;

/// Attempts allowed per game
pub const NUMBER_OF_GUESSES: usize = 6;

/// Size of the alphabet tracked by `AlphabetKnowledge`
pub const LETTERS_IN_ALPHABET: usize = 26;
