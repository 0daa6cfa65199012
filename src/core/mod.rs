//! Core domain types for the assistant
//!
//! Words, letter sets, known-letter patterns, feedback and the constraint board.
//! Everything here is plain data with no I/O.

mod board;
mod error;
mod feedback;
mod letters;
mod pattern;
mod word;

pub use board::Board;
pub use error::InputError;
pub use feedback::{Feedback, Mark, Marks};
pub use letters::{ALPHABET, ALPHABET_SIZE, LetterSet, letter_index, normalize_letter};
pub use pattern::Pattern;
pub use word::{WORD_LEN, Word};
