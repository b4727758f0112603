//! Per-position feedback for a guess
//!
//! Each position of a guess is classified as:
//! - `Absent` (letter not in the answer)
//! - `PresentWrongPosition` (letter in the answer, elsewhere)
//! - `ExactMatch` (letter in the same position)
//!
//! The derived ordering of `LetterResult` is the informativeness order used
//! when folding results into alphabet knowledge.

use super::{WORD_LENGTH, Word};

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterResult {
    Absent,
    PresentWrongPosition,
    ExactMatch,
}

/// How repeated letters in a guess are scored
///
/// Only `PresentWrongPosition` hints differ between the two policies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScoringPolicy {
    /// A letter that occurs anywhere in the answer is present at every
    /// non-exact position it is guessed in, however many times it is guessed.
    #[default]
    PerLetter,
    /// Canonical Wordle: exact matches claim answer letters first, then
    /// present hints are handed out left to right while unclaimed occurrences
    /// of that letter remain.
    CountAware,
}

/// Feedback for one guess against one answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterResult; WORD_LENGTH]);

impl Feedback {
    /// All exact matches
    pub const PERFECT: Self = Self([LetterResult::ExactMatch; WORD_LENGTH]);

    /// Build feedback from explicit per-position results
    #[must_use]
    pub const fn new(results: [LetterResult; WORD_LENGTH]) -> Self {
        Self(results)
    }

    /// Score `guess` against `answer` under the given policy
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterResult, ScoringPolicy, Word};
    ///
    /// let guess = Word::new("react").unwrap();
    /// let answer = Word::new("crate").unwrap();
    /// let feedback = Feedback::calculate(&guess, &answer, ScoringPolicy::PerLetter);
    ///
    /// assert_eq!(feedback.result_at(2), LetterResult::ExactMatch);
    /// assert!(!feedback.is_perfect());
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word, policy: ScoringPolicy) -> Self {
        match policy {
            ScoringPolicy::PerLetter => Self::per_letter(guess, answer),
            ScoringPolicy::CountAware => Self::count_aware(guess, answer),
        }
    }

    fn per_letter(guess: &Word, answer: &Word) -> Self {
        let mut results = [LetterResult::Absent; WORD_LENGTH];

        for (i, (&g, &a)) in guess.letters().iter().zip(answer.letters()).enumerate() {
            results[i] = if g == a {
                LetterResult::ExactMatch
            } else if answer.has_letter(g) {
                LetterResult::PresentWrongPosition
            } else {
                LetterResult::Absent
            };
        }

        Self(results)
    }

    fn count_aware(guess: &Word, answer: &Word) -> Self {
        let mut results = [LetterResult::Absent; WORD_LENGTH];
        let mut available = [0usize; 26];
        for &letter in answer.letters() {
            available[usize::from(letter - b'a')] = answer.count_of(letter);
        }

        // First pass: exact matches claim their answer letter
        for (i, (&g, &a)) in guess.letters().iter().zip(answer.letters()).enumerate() {
            if g == a {
                results[i] = LetterResult::ExactMatch;
                available[usize::from(g - b'a')] -= 1;
            }
        }

        // Second pass: present hints from whatever is left
        for (i, &g) in guess.letters().iter().enumerate() {
            if results[i] == LetterResult::ExactMatch {
                continue;
            }
            let slot = &mut available[usize::from(g - b'a')];
            if *slot > 0 {
                results[i] = LetterResult::PresentWrongPosition;
                *slot -= 1;
            }
        }

        Self(results)
    }

    /// Per-position results in guess order
    #[inline]
    #[must_use]
    pub const fn results(&self) -> &[LetterResult; WORD_LENGTH] {
        &self.0
    }

    /// Result at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn result_at(&self, position: usize) -> LetterResult {
        self.0[position]
    }

    /// Check if every position is an exact match
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count positions with the given result
    #[must_use]
    pub fn count(&self, result: LetterResult) -> usize {
        self.0.iter().filter(|&&r| r == result).count()
    }
}
