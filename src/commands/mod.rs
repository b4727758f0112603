//! Command implementations

pub mod score;
pub mod simple;

pub use score::{ScoreResult, score_word};
pub use simple::run_simple;

use crate::core::ScoringPolicy;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Settings shared by every way of playing
#[derive(Debug, Clone, Copy, Default)]
pub struct GameConfig {
    pub policy: ScoringPolicy,
    /// Fixed seed for reproducible answers; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Random source for drawing answers
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}
