//! Accumulated knowledge over a game
//!
//! Feedback is not stored per guess. It is folded into a running pattern (first
//! confirmation of a slot wins) and a growing set of letters known present.

use crate::core::{Board, Feedback, LetterSet, Pattern, Word};

/// Everything learned so far in one game
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Knowledge {
    pattern: Pattern,
    present: LetterSet,
    history: Vec<Word>,
}

impl Knowledge {
    /// A fresh game: nothing known, nothing guessed
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a known pattern, present letters and guesses
    #[must_use]
    pub fn from_parts(pattern: Pattern, present: LetterSet, history: Vec<Word>) -> Self {
        Self {
            pattern,
            present,
            history,
        }
    }

    /// Fold the feedback for `guess` into what is known
    pub fn record(&mut self, guess: Word, feedback: &Feedback) {
        self.pattern = self.pattern.merge(&feedback.pattern);
        self.present = self.present.union(feedback.present);
        self.history.push(guess);
    }

    /// The constraint board for the current knowledge
    #[must_use]
    pub fn board(&self) -> Board {
        Board::new(self.pattern, self.present, self.history.clone())
    }

    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    #[must_use]
    pub const fn present(&self) -> LetterSet {
        self.present
    }

    #[must_use]
    pub fn history(&self) -> &[Word] {
        &self.history
    }

    /// Number of guesses played
    #[must_use]
    pub fn turns(&self) -> usize {
        self.history.len()
    }
}
