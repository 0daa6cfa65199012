//! Hint command
//!
//! Builds a board from what the player already knows and suggests guesses.

use crate::core::{Board, InputError, LetterSet, Pattern, Word};
use crate::solver::{SolveError, Solver, Suggestion};

/// What the player knows so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintConfig {
    pub pattern: Pattern,
    pub present: LetterSet,
    pub history: Vec<Word>,
    /// How many guesses to show, and the candidate count at or below which
    /// every remaining candidate is listed
    pub show_guesses: usize,
}

impl HintConfig {
    /// Parse command-line style arguments
    ///
    /// Missing pattern and present letters mean nothing is known yet.
    ///
    /// # Errors
    ///
    /// Returns `InputError` if the pattern, letters or any guess is malformed.
    pub fn parse(
        pattern: Option<&str>,
        present: Option<&str>,
        history: &[String],
        show_guesses: usize,
    ) -> Result<Self, InputError> {
        Ok(Self {
            pattern: pattern.map(Pattern::parse).transpose()?.unwrap_or_default(),
            present: present.map(LetterSet::parse).transpose()?.unwrap_or_default(),
            history: history
                .iter()
                .map(|text| Word::new(text))
                .collect::<Result<_, _>>()?,
            show_guesses,
        })
    }

    #[must_use]
    pub fn board(&self) -> Board {
        Board::new(self.pattern, self.present, self.history.clone())
    }
}

/// Suggestions for the current position
pub struct HintResult {
    pub board: Board,
    pub suggestion: Suggestion,
    pub show_guesses: usize,
}

impl HintResult {
    /// Remaining candidates, when few enough to list
    #[must_use]
    pub fn listed_candidates(&self) -> Option<&[Word]> {
        let remaining = self.suggestion.remaining();
        (remaining.size() <= self.show_guesses).then(|| remaining.words())
    }
}

/// Suggest the next guess
///
/// # Errors
///
/// Returns `SolveError::ExhaustedCandidates` when no answer fits what is known.
pub fn run_hint(solver: &Solver<'_>, config: &HintConfig) -> Result<HintResult, SolveError> {
    let board = config.board();
    let suggestion = solver.suggest(&board, config.show_guesses)?;

    Ok(HintResult {
        board,
        suggestion,
        show_guesses: config.show_guesses,
    })
}
