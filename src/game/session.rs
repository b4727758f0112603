//! A single game against one hidden answer
//!
//! `Session::submit_guess` is the only way to change a game: it validates
//! the raw guess, scores it and records it, then reports the outcome.

use super::{Attempt, GameState, GameStatus, GuessError, SessionError};
use crate::core::{AlphabetKnowledge, Dictionary, Feedback, ScoringPolicy, Word};
use log::debug;
use rand::Rng;

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptOutcome {
    /// The attempt as recorded
    pub attempt: Attempt,
    /// Knowledge after folding this attempt in
    pub knowledge: AlphabetKnowledge,
    /// Status after this attempt
    pub status: GameStatus,
}

/// One game: borrows the dictionary, owns everything else
pub struct Session<'a> {
    dictionary: &'a Dictionary,
    policy: ScoringPolicy,
    state: GameState,
}

impl<'a> Session<'a> {
    /// Start a game with an answer drawn uniformly from `dictionary`
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptyDictionary` if there is nothing to draw.
    ///
    /// # Examples
    /// ```
    /// use rand::{SeedableRng, rngs::StdRng};
    /// use wordle_game::core::{Dictionary, Word};
    /// use wordle_game::game::{GameStatus, Session};
    ///
    /// let dictionary = Dictionary::new(["crate"].iter().map(|w| Word::new(w).unwrap()));
    /// let mut session = Session::new(&dictionary, &mut StdRng::seed_from_u64(1)).unwrap();
    ///
    /// let outcome = session.submit_guess("CRATE").unwrap();
    /// assert_eq!(outcome.status, GameStatus::Won);
    /// ```
    pub fn new<R: Rng + ?Sized>(
        dictionary: &'a Dictionary,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        let answer = dictionary
            .choose(rng)
            .cloned()
            .ok_or(SessionError::EmptyDictionary)?;

        debug!("new game from {} words", dictionary.len());
        Ok(Self::start(dictionary, answer))
    }

    /// Start a game with a fixed answer
    ///
    /// # Errors
    ///
    /// Returns an error if the dictionary is empty, the answer is malformed,
    /// or the answer is not in the dictionary.
    pub fn with_answer(dictionary: &'a Dictionary, answer: &str) -> Result<Self, SessionError> {
        if dictionary.is_empty() {
            return Err(SessionError::EmptyDictionary);
        }

        let answer = Word::new(answer)?;
        if !dictionary.contains(answer.text()) {
            return Err(SessionError::AnswerNotInDictionary(answer.text().to_string()));
        }

        Ok(Self::start(dictionary, answer))
    }

    fn start(dictionary: &'a Dictionary, answer: Word) -> Self {
        Self {
            dictionary,
            policy: ScoringPolicy::default(),
            state: GameState::new(answer),
        }
    }

    /// Use a different duplicate-letter scoring policy
    #[must_use]
    pub fn with_policy(mut self, policy: ScoringPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Check a raw guess without touching the game
    ///
    /// Rules apply in order: length, characters, dictionary membership.
    ///
    /// # Errors
    ///
    /// Returns the first rule the guess breaks.
    pub fn validate(&self, raw: &str) -> Result<Word, GuessError> {
        let word = Word::new(raw)?;
        if !self.dictionary.contains(word.text()) {
            return Err(GuessError::NotInDictionary(word.text().to_string()));
        }
        Ok(word)
    }

    /// Validate, score and record a guess
    ///
    /// Nothing changes when an error is returned.
    ///
    /// # Errors
    ///
    /// Returns `GuessError::GameOver` once the game is won or lost, otherwise
    /// the validation failure from [`Session::validate`].
    pub fn submit_guess(&mut self, raw: &str) -> Result<AttemptOutcome, GuessError> {
        if self.state.is_terminal() {
            return Err(GuessError::GameOver(self.state.status()));
        }

        let guess = self.validate(raw)?;
        let feedback = Feedback::calculate(&guess, self.state.answer(), self.policy);
        let attempt = Attempt::new(
            self.state.next_attempt_number(),
            guess,
            feedback,
            self.state.answer(),
        );

        self.state.record_attempt(attempt.clone());

        Ok(AttemptOutcome {
            attempt,
            knowledge: *self.state.knowledge(),
            status: self.state.status(),
        })
    }

    /// The answer, for the end-of-game reveal
    #[must_use]
    pub fn answer(&self) -> &str {
        self.state.answer().text()
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        self.state.attempts()
    }

    #[must_use]
    pub const fn knowledge(&self) -> &AlphabetKnowledge {
        self.state.knowledge()
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.state.status()
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    #[must_use]
    pub const fn policy(&self) -> ScoringPolicy {
        self.policy
    }
}
