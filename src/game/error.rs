//! Errors returned across the game boundary
//!
//! All of these are recoverable user-input errors; the caller decides how
//! to show them.

use super::GameStatus;
use crate::core::{CharacterProblem, LengthProblem, WORD_LENGTH, WordError};
use thiserror::Error;

/// Why a guess was not counted as an attempt
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Guess is invalid because it's {problem} ({found} of {expected} letters).", expected = WORD_LENGTH)]
    InvalidLength { problem: LengthProblem, found: usize },

    #[error("Guess is invalid because {0}.")]
    InvalidCharacters(CharacterProblem),

    #[error("Guess '{0}' is not a valid word in the dictionary.")]
    NotInDictionary(String),

    #[error("The game is already over ({0}).")]
    GameOver(GameStatus),
}

impl From<WordError> for GuessError {
    fn from(err: WordError) -> Self {
        match err {
            WordError::InvalidLength { problem, found } => Self::InvalidLength { problem, found },
            WordError::InvalidCharacters(problem) => Self::InvalidCharacters(problem),
        }
    }
}

/// Why a game could not be started
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("dictionary is empty, no answer can be chosen")]
    EmptyDictionary,

    #[error("answer is not a valid word: {0}")]
    InvalidAnswer(#[from] WordError),

    #[error("answer '{0}' is not in the dictionary")]
    AnswerNotInDictionary(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_messages_distinguish_short_and_long() {
        let short = GuessError::InvalidLength {
            problem: LengthProblem::TooShort,
            found: 3,
        };
        assert_eq!(
            short.to_string(),
            "Guess is invalid because it's too short (3 of 5 letters)."
        );

        let long = GuessError::InvalidLength {
            problem: LengthProblem::TooLong,
            found: 6,
        };
        assert!(long.to_string().contains("too long"));
    }

    #[test]
    fn character_messages() {
        assert_eq!(
            GuessError::InvalidCharacters(CharacterProblem::Digits).to_string(),
            "Guess is invalid because it contains digits."
        );
        assert!(
            GuessError::InvalidCharacters(CharacterProblem::Disallowed('!'))
                .to_string()
                .contains("not allowed")
        );
    }

    #[test]
    fn word_error_maps_onto_guess_error() {
        let err: GuessError = WordError::InvalidCharacters(CharacterProblem::Digits).into();
        assert_eq!(err, GuessError::InvalidCharacters(CharacterProblem::Digits));
    }
}
