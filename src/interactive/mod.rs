//! Interactive TUI interface
//!
//! Playable board with a colour-coded keyboard, built on ratatui.

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, run_tui};
