//! One-off scoring command
//!
//! Scores a guess against any well-formed word, without a game or dictionary.

use crate::core::{Feedback, ScoringPolicy, Word, WordError};

/// Result of scoring one guess
pub struct ScoreResult {
    pub guess: Word,
    pub answer: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `answer`
///
/// # Errors
///
/// Returns an error naming which word is malformed.
pub fn score_word(guess: &str, answer: &str, policy: ScoringPolicy) -> Result<ScoreResult, String> {
    let describe = |which: &str, err: WordError| format!("Invalid {which}: {err}");

    let guess = Word::new(guess).map_err(|e| describe("guess", e))?;
    let answer = Word::new(answer).map_err(|e| describe("answer", e))?;
    let feedback = Feedback::calculate(&guess, &answer, policy);

    Ok(ScoreResult {
        guess,
        answer,
        feedback,
    })
}
