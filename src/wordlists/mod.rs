//! Word lists for the assistant
//!
//! Answer and guess corpora are plain-text files, one word per line.

pub mod loader;

/// Default answer corpus
pub const DEFAULT_ANSWERS_PATH: &str = "data/good.txt";

/// Default guess corpus
pub const DEFAULT_GUESSES_PATH: &str = "data/valid.txt";
