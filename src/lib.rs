//! Wordle Assist
//!
//! A Wordle assistant that turns what is known about the answer into letter
//! constraints, prunes a word corpus with them and ranks guesses by how evenly
//! their letters split the remaining candidates.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assist::core::{Board, LetterSet, Word};
//! use wordle_assist::solver::{CandidateStore, Solver};
//!
//! let words = CandidateStore::from_words(["crane", "crate", "craze", "grate", "slate"]);
//! let solver = Solver::new(&words, &words);
//!
//! // Played CRANE: C, R, A and E green, N gray
//! let board = Board::new(
//!     "CRA.E".parse().unwrap(),
//!     LetterSet::parse("CRAE").unwrap(),
//!     vec![Word::new("crane").unwrap()],
//! );
//!
//! let suggestion = solver.suggest(&board, 1).unwrap();
//! assert_eq!(suggestion.remaining().size(), 2);
//! assert_eq!(suggestion.best().word.text(), "CRATE");
//! ```

// Core domain types
pub mod core;

// Pruning, ranking and the solve loop
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
