//! Solver failures

use thiserror::Error;

/// Error type for the solve loop and guess suggestions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The constraints admit no word of the answer corpus
    #[error("No valid guesses!")]
    ExhaustedCandidates,
    /// Candidates remain but the guess corpus has nothing to rank
    #[error("no guess available to rank")]
    NoGuessAvailable,
    /// The target was not found within the turn limit
    #[error("gave up after {turns} guesses")]
    TurnLimit { turns: usize },
}
