//! Wordle Game
//!
//! A Wordle-style word guessing game: six tries to find a hidden five-letter
//! word, with per-letter feedback and a keyboard that remembers what you learned.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::{SeedableRng, rngs::StdRng};
//! use wordle_game::game::Session;
//! use wordle_game::wordlists::{DICTIONARY, loader::dictionary_from_slice};
//!
//! let dictionary = dictionary_from_slice(DICTIONARY);
//! let mut session = Session::new(&dictionary, &mut StdRng::seed_from_u64(7)).unwrap();
//!
//! let outcome = session.submit_guess("crate").unwrap();
//! println!("{:?}", outcome.attempt.feedback().results());
//! assert_eq!(outcome.attempt.number(), 1);
//! ```

// Core domain types
pub mod core;

// Sessions, validation and game state
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
