//! Per-process game statistics
//!
//! Kept in memory only; nothing survives the process.

use super::{GameStatus, Session};
use crate::core::NUMBER_OF_GUESSES;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    /// Index `n - 1` counts games won in `n` guesses
    pub guess_distribution: [usize; NUMBER_OF_GUESSES],
    pub current_streak: usize,
    pub max_streak: usize,
}

impl Statistics {
    /// Count a finished session; sessions still in progress are ignored
    pub fn record(&mut self, session: &Session<'_>) {
        match session.status() {
            GameStatus::InProgress => {}
            GameStatus::Won => {
                self.games_played += 1;
                self.games_won += 1;
                let guesses = session.attempts().len();
                if let Some(bucket) = guesses
                    .checked_sub(1)
                    .and_then(|i| self.guess_distribution.get_mut(i))
                {
                    *bucket += 1;
                }
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
            }
            GameStatus::Lost => {
                self.games_played += 1;
                self.current_streak = 0;
            }
        }
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dictionary, Word};

    fn dictionary() -> Dictionary {
        Dictionary::new(
            ["crate", "plumb", "react"]
                .iter()
                .map(|w| Word::new(w).unwrap()),
        )
    }

    #[test]
    fn empty_statistics() {
        let stats = Statistics::default();
        assert_eq!(stats.games_played, 0);
        assert!(stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn records_wins_and_losses() {
        let dict = dictionary();
        let mut stats = Statistics::default();

        let mut won = Session::with_answer(&dict, "crate").unwrap();
        won.submit_guess("react").unwrap();
        won.submit_guess("crate").unwrap();
        stats.record(&won);

        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution[1], 1);
        assert_eq!(stats.current_streak, 1);

        let mut lost = Session::with_answer(&dict, "crate").unwrap();
        for _ in 0..NUMBER_OF_GUESSES {
            lost.submit_guess("plumb").unwrap();
        }
        stats.record(&lost);

        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.max_streak, 1);
        assert!((stats.win_rate() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn in_progress_sessions_are_not_counted() {
        let dict = dictionary();
        let mut stats = Statistics::default();
        let session = Session::with_answer(&dict, "crate").unwrap();
        stats.record(&session);
        assert_eq!(stats, Statistics::default());
    }
}
