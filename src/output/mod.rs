//! Terminal output formatting
//!
//! Display utilities for the console game and one-off commands.

pub mod display;
pub mod formatters;

pub use display::{print_knowledge, print_progress, print_score, print_statistics};
