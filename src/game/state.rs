//! Game state: answer, attempts, alphabet knowledge, status

use crate::core::{AlphabetKnowledge, Feedback, NUMBER_OF_GUESSES, Word};
use log::debug;
use std::fmt;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// One accepted, scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    number: usize,
    guess: Word,
    feedback: Feedback,
    is_win: bool,
}

impl Attempt {
    pub(crate) fn new(number: usize, guess: Word, feedback: Feedback, answer: &Word) -> Self {
        let is_win = guess == *answer;
        Self {
            number,
            guess,
            feedback,
            is_win,
        }
    }

    /// 1-based position of this attempt in the game
    #[must_use]
    pub const fn number(&self) -> usize {
        self.number
    }

    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    #[must_use]
    pub const fn is_win(&self) -> bool {
        self.is_win
    }
}

/// Everything one game knows
///
/// Read access is public; the only mutator is crate-private and driven by
/// `Session::submit_guess`.
#[derive(Debug, Clone)]
pub struct GameState {
    answer: Word,
    attempts: Vec<Attempt>,
    knowledge: AlphabetKnowledge,
    status: GameStatus,
}

impl GameState {
    pub(crate) fn new(answer: Word) -> Self {
        Self {
            answer,
            attempts: Vec::with_capacity(NUMBER_OF_GUESSES),
            knowledge: AlphabetKnowledge::new(),
            status: GameStatus::InProgress,
        }
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    /// Attempts made so far, oldest first
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// One entry per allowed guess; slots not played yet are `None`
    pub fn slots(&self) -> impl Iterator<Item = Option<&Attempt>> {
        (0..NUMBER_OF_GUESSES).map(|i| self.attempts.get(i))
    }

    #[must_use]
    pub const fn knowledge(&self) -> &AlphabetKnowledge {
        &self.knowledge
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// 1-based number the next attempt will get
    #[must_use]
    pub fn next_attempt_number(&self) -> usize {
        self.attempts.len() + 1
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        NUMBER_OF_GUESSES.saturating_sub(self.attempts.len())
    }

    /// Append an attempt, fold its feedback and update the status
    ///
    /// Callers must not record into a terminal game.
    pub(crate) fn record_attempt(&mut self, attempt: Attempt) {
        debug_assert!(!self.is_terminal(), "attempt recorded after game over");

        self.knowledge.fold(attempt.guess(), attempt.feedback());

        self.status = if attempt.is_win() {
            GameStatus::Won
        } else if self.attempts.len() + 1 >= NUMBER_OF_GUESSES {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };

        debug!(
            "attempt {} '{}' recorded, game {}",
            attempt.number(),
            attempt.guess(),
            self.status
        );
        self.attempts.push(attempt);
    }
}
