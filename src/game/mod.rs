//! Game flow: a session validates and scores guesses and tracks game state

mod error;
mod session;
mod state;
mod statistics;

pub use error::{GuessError, SessionError};
pub use session::{AttemptOutcome, Session};
pub use state::{Attempt, GameState, GameStatus};
pub use statistics::Statistics;
