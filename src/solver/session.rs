//! Solve loop
//!
//! Coordinates the answer and guess corpora: builds a board from what is known,
//! prunes, picks a guess and, when the target is known, simulates feedback until
//! the target is guessed.

use super::error::SolveError;
use super::ranker::{RankedGuess, find_best};
use super::state::Knowledge;
use super::store::CandidateStore;
use crate::core::{Board, Feedback, Marks, Word};
use log::debug;
use std::borrow::Cow;

/// Candidate counts at or below this are guessed directly, alphabetically
pub const ENDGAME_SIZE: usize = 2;

/// Default bound on guesses per target
pub const DEFAULT_MAX_TURNS: usize = 64;

/// The guess policy's answer for one board
#[derive(Debug, Clone)]
pub struct Suggestion {
    remaining: CandidateStore,
    picks: Vec<RankedGuess>,
}

impl Suggestion {
    /// The guess to play
    #[must_use]
    pub fn best(&self) -> RankedGuess {
        self.picks[0]
    }

    /// Every pick, best first
    #[must_use]
    pub fn picks(&self) -> &[RankedGuess] {
        &self.picks
    }

    /// Answer candidates still consistent with the board
    #[must_use]
    pub const fn remaining(&self) -> &CandidateStore {
        &self.remaining
    }

    /// True when the picks are the remaining candidates themselves
    #[must_use]
    pub fn is_endgame(&self) -> bool {
        self.remaining.size() <= ENDGAME_SIZE
    }
}

/// One played guess of a solve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveStep {
    pub guess: Word,
    pub score: f64,
    /// Answer candidates left before this guess was played
    pub remaining: usize,
    pub feedback: Feedback,
}

/// The guesses that found a target
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub target: Word,
    pub steps: Vec<SolveStep>,
}

impl Solution {
    /// The guesses in order; the last one is the target
    #[must_use]
    pub fn guesses(&self) -> Vec<Word> {
        self.steps.iter().map(|step| step.guess).collect()
    }

    /// Number of guesses needed
    #[must_use]
    pub fn turns(&self) -> usize {
        self.steps.len()
    }

    /// Feedback tiles for each step
    pub fn marks(&self) -> impl Iterator<Item = Marks> + '_ {
        self.steps
            .iter()
            .map(|step| Marks::between(&step.guess, &self.target))
    }
}

/// Guess picker over an answer corpus and a guess corpus
///
/// Both corpora are loaded once; every board prunes fresh snapshots of them.
pub struct Solver<'a> {
    answers: &'a CandidateStore,
    guesses: &'a CandidateStore,
    hard_mode: bool,
    max_turns: usize,
}

impl<'a> Solver<'a> {
    /// Create a new solver
    ///
    /// # Parameters
    /// - `answers`: words that can be the target
    /// - `guesses`: words that may be played
    #[must_use]
    pub const fn new(answers: &'a CandidateStore, guesses: &'a CandidateStore) -> Self {
        Self {
            answers,
            guesses,
            hard_mode: false,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }

    /// In hard mode guesses are also restricted to words the board admits
    #[must_use]
    pub const fn with_hard_mode(mut self, hard_mode: bool) -> Self {
        self.hard_mode = hard_mode;
        self
    }

    #[must_use]
    pub const fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    #[must_use]
    pub const fn hard_mode(&self) -> bool {
        self.hard_mode
    }

    #[must_use]
    pub const fn answers(&self) -> &'a CandidateStore {
        self.answers
    }

    #[must_use]
    pub const fn guesses(&self) -> &'a CandidateStore {
        self.guesses
    }

    /// Answer candidates consistent with `board`
    #[must_use]
    pub fn candidates(&self, board: &Board) -> CandidateStore {
        self.answers.prune(board)
    }

    /// Pick guesses for `board`
    ///
    /// With at most two candidates left, the candidates themselves are returned
    /// alphabetically, each scored `1 / remaining`. Otherwise the guess corpus
    /// is ranked against the remaining candidates and the best `top_k` kept.
    ///
    /// # Errors
    ///
    /// Returns `SolveError::ExhaustedCandidates` if no answer fits the board, and
    /// `SolveError::NoGuessAvailable` if the guess corpus has nothing to rank.
    pub fn suggest(&self, board: &Board, top_k: usize) -> Result<Suggestion, SolveError> {
        let remaining = self.candidates(board);

        let picks = match remaining.size() {
            0 => return Err(SolveError::ExhaustedCandidates),
            n @ 1..=ENDGAME_SIZE => {
                let score = 1.0 / n as f64;
                remaining
                    .words()
                    .iter()
                    .map(|&word| RankedGuess { score, word })
                    .collect()
            }
            _ => {
                let pool = if self.hard_mode {
                    Cow::Owned(self.guesses.prune(board))
                } else {
                    Cow::Borrowed(self.guesses)
                };
                find_best(pool.words(), board, &remaining, top_k.max(1))
            }
        };

        if picks.is_empty() {
            return Err(SolveError::NoGuessAvailable);
        }

        Ok(Suggestion { remaining, picks })
    }

    /// Play against a known `target` until it is guessed
    ///
    /// # Errors
    ///
    /// Returns `SolveError::ExhaustedCandidates` when the constraints rule out
    /// every answer (for instance when `target` is not in the answer corpus),
    /// `SolveError::NoGuessAvailable` when there is nothing to guess, and
    /// `SolveError::TurnLimit` when the turn limit is reached.
    pub fn solve(&self, target: &Word) -> Result<Solution, SolveError> {
        let mut knowledge = Knowledge::new();
        let mut steps = Vec::new();

        loop {
            if steps.len() >= self.max_turns {
                return Err(SolveError::TurnLimit { turns: steps.len() });
            }

            let board = knowledge.board();
            let suggestion = self.suggest(&board, 1)?;
            let RankedGuess { score, word: guess } = suggestion.best();
            let feedback = Feedback::simulate(&guess, target);

            debug!(
                "{target} turn {}: {guess} score={score:.3} remaining={} pattern={}",
                steps.len() + 1,
                suggestion.remaining().size(),
                feedback.pattern
            );

            steps.push(SolveStep {
                guess,
                score,
                remaining: suggestion.remaining().size(),
                feedback,
            });
            knowledge.record(guess, &feedback);

            if guess == *target {
                return Ok(Solution {
                    target: *target,
                    steps,
                });
            }
        }
    }
}

/// Solve `target` with freshly configured corpora
///
/// # Errors
///
/// See [`Solver::solve`].
///
/// # Examples
/// ```
/// use wordle_assist::core::Word;
/// use wordle_assist::solver::{CandidateStore, solve};
///
/// let words = CandidateStore::from_words(["crane", "crate", "grate", "slate", "irate"]);
/// let target = Word::new("crate").unwrap();
///
/// let solution = solve(&target, &words, &words, false).unwrap();
/// assert_eq!(solution.guesses().last(), Some(&target));
/// ```
pub fn solve(
    target: &Word,
    answers: &CandidateStore,
    guesses: &CandidateStore,
    hard_mode: bool,
) -> Result<Solution, SolveError> {
    Solver::new(answers, guesses)
        .with_hard_mode(hard_mode)
        .solve(target)
}
