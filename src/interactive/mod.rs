//! Interactive TUI interface
//!
//! Full-screen assistant for a game played elsewhere: enter each word played
//! and the tiles the game showed, and get the next suggestion.

mod app;
mod rendering;

pub use app::{App, InputMode, MessageStyle, Row, run_tui};
