//! Candidate pruning, guess ranking and the solve loop

mod error;
pub mod ranker;
mod session;
mod state;
mod store;

pub use error::SolveError;
pub use ranker::{RankedGuess, find_best};
pub use session::{
    DEFAULT_MAX_TURNS, ENDGAME_SIZE, Solution, SolveStep, Solver, Suggestion, solve,
};
pub use state::Knowledge;
pub use store::{CandidateStore, LetterStats};
