//! Cumulative per-letter knowledge across a game
//!
//! Backs the on-screen keyboard. A letter's entry only ever moves up the
//! `Absent < PresentWrongPosition < ExactMatch` order.

use super::{Feedback, LETTERS_IN_ALPHABET, LetterResult, Word};
use log::trace;

/// Best-known classification for each of the 26 letters
///
/// `None` means the letter has not been guessed yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlphabetKnowledge {
    letters: [Option<LetterResult>; LETTERS_IN_ALPHABET],
}

impl AlphabetKnowledge {
    /// Knowledge before any guess
    #[must_use]
    pub const fn new() -> Self {
        Self {
            letters: [None; LETTERS_IN_ALPHABET],
        }
    }

    /// Look up a letter; case-insensitive, `None` for non-letters
    #[must_use]
    pub fn get(&self, letter: char) -> Option<LetterResult> {
        index_of(letter).and_then(|i| self.letters[i])
    }

    /// Record one observation for a letter, never downgrading
    ///
    /// - `ExactMatch` always sticks.
    /// - `PresentWrongPosition` replaces anything but `ExactMatch`.
    /// - `Absent` is only stored for a letter with no classification yet.
    ///
    /// Returns `true` if the stored value changed.
    pub fn record(&mut self, letter: u8, result: LetterResult) -> bool {
        let Some(i) = index_of(char::from(letter)) else {
            return false;
        };

        let slot = &mut self.letters[i];
        if slot.is_some_and(|known| known >= result) {
            return false;
        }

        trace!("letter {} upgraded {:?} -> {result:?}", char::from(letter), *slot);
        *slot = Some(result);
        true
    }

    /// Fold a scored guess into the knowledge, position by position
    pub fn fold(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &result) in guess.letters().iter().zip(feedback.results()) {
            self.record(letter, result);
        }
    }

    /// Iterate over `('a', ..)` through `('z', ..)`
    pub fn iter(&self) -> impl Iterator<Item = (char, Option<LetterResult>)> + '_ {
        (b'a'..=b'z').map(char::from).zip(self.letters.iter().copied())
    }

    /// All letters whose stored classification equals `result`, alphabetically
    ///
    /// Pass `None` to list the letters not guessed yet.
    #[must_use]
    pub fn letters_with(&self, result: Option<LetterResult>) -> Vec<char> {
        self.iter()
            .filter(|&(_, known)| known == result)
            .map(|(letter, _)| letter)
            .collect()
    }
}

fn index_of(letter: char) -> Option<usize> {
    letter
        .is_ascii_alphabetic()
        .then(|| usize::from(letter.to_ascii_lowercase() as u8 - b'a'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScoringPolicy;
    use LetterResult::{Absent, ExactMatch, PresentWrongPosition};

    fn fold(knowledge: &mut AlphabetKnowledge, guess: &str, answer: &str) {
        let guess = Word::new(guess).unwrap();
        let answer = Word::new(answer).unwrap();
        let feedback = Feedback::calculate(&guess, &answer, ScoringPolicy::PerLetter);
        knowledge.fold(&guess, &feedback);
    }

    #[test]
    fn starts_empty() {
        let knowledge = AlphabetKnowledge::new();
        assert!(knowledge.iter().all(|(_, known)| known.is_none()));
        assert_eq!(knowledge.letters_with(None).len(), 26);
    }

    #[test]
    fn record_upgrades_but_never_downgrades() {
        let mut knowledge = AlphabetKnowledge::new();

        assert!(knowledge.record(b'e', Absent));
        assert!(knowledge.record(b'e', PresentWrongPosition));
        assert!(!knowledge.record(b'e', Absent));
        assert_eq!(knowledge.get('e'), Some(PresentWrongPosition));

        assert!(knowledge.record(b'e', ExactMatch));
        assert!(!knowledge.record(b'e', PresentWrongPosition));
        assert!(!knowledge.record(b'e', Absent));
        assert_eq!(knowledge.get('e'), Some(ExactMatch));
    }

    #[test]
    fn get_is_case_insensitive_and_ignores_non_letters() {
        let mut knowledge = AlphabetKnowledge::new();
        knowledge.record(b'q', Absent);
        assert_eq!(knowledge.get('Q'), Some(Absent));
        assert_eq!(knowledge.get('1'), None);
        assert!(!knowledge.record(b'!', ExactMatch));
    }

    #[test]
    fn fold_react_against_crate() {
        let mut knowledge = AlphabetKnowledge::new();
        fold(&mut knowledge, "react", "crate");

        assert_eq!(knowledge.get('a'), Some(ExactMatch));
        for letter in ['r', 'e', 'c', 't'] {
            assert_eq!(knowledge.get(letter), Some(PresentWrongPosition));
        }
        assert_eq!(knowledge.get('z'), None);
    }

    #[test]
    fn exact_survives_later_present_and_absent() {
        let mut knowledge = AlphabetKnowledge::new();
        fold(&mut knowledge, "crate", "crate");
        // c is present (not exact) in this guess; a, t, e are elsewhere too
        fold(&mut knowledge, "react", "crate");
        for letter in ['c', 'r', 'a', 't', 'e'] {
            assert_eq!(knowledge.get(letter), Some(ExactMatch), "{letter}");
        }
    }

    #[test]
    fn exact_and_present_in_the_same_guess_keeps_exact() {
        // GEESE vs CRATE: the last E is exact, earlier E's are present
        let mut knowledge = AlphabetKnowledge::new();
        fold(&mut knowledge, "geese", "crate");
        assert_eq!(knowledge.get('e'), Some(ExactMatch));

        // Reversed order within a guess: exact first, present later
        let mut knowledge = AlphabetKnowledge::new();
        fold(&mut knowledge, "eerie", "erase");
        assert_eq!(knowledge.get('e'), Some(ExactMatch));
    }

    #[test]
    fn known_letter_never_becomes_absent() {
        let mut knowledge = AlphabetKnowledge::new();
        knowledge.record(b'r', PresentWrongPosition);
        knowledge.record(b'r', Absent);
        assert_eq!(knowledge.get('r'), Some(PresentWrongPosition));
    }

    #[test]
    fn letters_with_groups_alphabetically() {
        let mut knowledge = AlphabetKnowledge::new();
        fold(&mut knowledge, "plumb", "crate");
        assert_eq!(knowledge.letters_with(Some(Absent)), vec!['b', 'l', 'm', 'p', 'u']);
        assert!(knowledge.letters_with(Some(ExactMatch)).is_empty());
        assert_eq!(knowledge.letters_with(None).len(), 21);
    }
}
