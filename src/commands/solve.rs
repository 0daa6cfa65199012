//! Auto-solve command
//!
//! Plays the solver against given target words with simulated feedback.

use crate::core::Word;
use crate::solver::{Solution, Solver};
use anyhow::{Context, Result};
use log::info;

/// Solve one target given as text
///
/// # Errors
///
/// Returns an error if `text` is not a valid word or the solver fails.
pub fn solve_word(solver: &Solver<'_>, text: &str) -> Result<Solution> {
    let target = Word::new(text).with_context(|| format!("invalid target word '{text}'"))?;
    let solution = solver.solve(&target)?;
    info!("{target} solved in {} guesses", solution.turns());
    Ok(solution)
}

/// Solve every target in order, handing each solution to `report` as soon as
/// it is found
///
/// # Errors
///
/// Returns the first failure; targets before it have already been reported.
pub fn solve_words<F>(solver: &Solver<'_>, targets: &[String], mut report: F) -> Result<()>
where
    F: FnMut(&Solution),
{
    for text in targets {
        report(&solve_word(solver, text)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{CandidateStore, SolveError};

    fn corpus() -> CandidateStore {
        CandidateStore::from_words(["crane", "crate", "grate", "irate", "slate", "plate"])
    }

    #[test]
    fn solves_each_target() {
        let words = corpus();
        let solver = Solver::new(&words, &words);
        let targets = vec!["crate".to_string(), "PLATE".to_string()];

        let mut solutions = Vec::new();
        solve_words(&solver, &targets, |s| solutions.push(s.clone())).unwrap();
        assert_eq!(solutions.len(), 2);
        assert_eq!(solutions[0].target.text(), "CRATE");
        assert_eq!(solutions[1].guesses().last().unwrap().text(), "PLATE");
    }

    #[test]
    fn invalid_target_is_an_error() {
        let words = corpus();
        let solver = Solver::new(&words, &words);

        assert!(solve_word(&solver, "toolong").is_err());
    }

    #[test]
    fn exhaustion_is_preserved_for_the_caller() {
        let words = corpus();
        let solver = Solver::new(&words, &words);

        let err = solve_word(&solver, "zzzzz").unwrap_err();
        assert_eq!(
            err.downcast_ref::<SolveError>(),
            Some(&SolveError::ExhaustedCandidates)
        );
    }

    #[test]
    fn targets_before_a_failure_are_still_reported() {
        let words = corpus();
        let solver = Solver::new(&words, &words);
        let targets = vec!["crate".to_string(), "zzzzz".to_string(), "slate".to_string()];

        let mut reported = Vec::new();
        let result = solve_words(&solver, &targets, |s| reported.push(s.target));

        assert!(result.is_err());
        assert_eq!(reported, [Word::new("crate").unwrap()]);
    }
}
