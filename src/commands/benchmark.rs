//! Benchmark command
//!
//! Solves every word of a corpus and summarises how many guesses each took.

use crate::core::Word;
use crate::solver::{SolveError, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Which targets to run and how to report progress
#[derive(Debug, Clone, Copy, Default)]
pub struct BenchmarkConfig {
    /// Only run this many targets
    pub limit: Option<usize>,
    /// Pick targets in random order instead of alphabetically
    pub shuffle: bool,
    /// Show a progress bar
    pub progress: bool,
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count -> number of targets
    pub distribution: BTreeMap<usize, usize>,
    /// Targets needing the most guesses, worst first
    pub worst_words: Vec<(Word, usize)>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Choose the benchmark targets from a corpus
#[must_use]
pub fn select_targets(words: &[Word], config: &BenchmarkConfig) -> Vec<Word> {
    let mut targets = words.to_vec();
    if config.shuffle {
        targets.shuffle(&mut rand::rng());
    }
    if let Some(limit) = config.limit {
        targets.truncate(limit);
    }
    targets
}

/// Solve every target and gather statistics
///
/// Targets are solved in parallel.
///
/// # Errors
///
/// Returns the solver error of a failing target; a benchmark is only reported
/// when every target was solved.
pub fn run_benchmark(
    solver: &Solver<'_>,
    targets: &[Word],
    config: &BenchmarkConfig,
) -> Result<BenchmarkResult, SolveError> {
    let start = Instant::now();

    let pb = if config.progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );

    let turns: Vec<(Word, usize)> = targets
        .par_iter()
        .map(|target| {
            let solution = solver.solve(target)?;
            pb.inc(1);
            Ok((*target, solution.turns()))
        })
        .collect::<Result<_, SolveError>>()?;

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let result = summarize(&turns, duration);
    info!(
        "benchmark: {} words, average {:.3} guesses in {:.2}s",
        result.total_words,
        result.average_guesses,
        duration.as_secs_f64()
    );
    Ok(result)
}

fn summarize(turns: &[(Word, usize)], duration: Duration) -> BenchmarkResult {
    let total_words = turns.len();
    let total_guesses: usize = turns.iter().map(|&(_, n)| n).sum();

    let mut distribution = BTreeMap::new();
    for &(_, n) in turns {
        *distribution.entry(n).or_insert(0) += 1;
    }

    let mut worst_words = turns.to_vec();
    worst_words.sort_by(|(w1, n1), (w2, n2)| n2.cmp(n1).then_with(|| w1.cmp(w2)));
    worst_words.truncate(10);

    let average_guesses = if total_words == 0 {
        0.0
    } else {
        total_guesses as f64 / total_words as f64
    };

    BenchmarkResult {
        total_words,
        total_guesses,
        average_guesses,
        min_guesses: turns.iter().map(|&(_, n)| n).min().unwrap_or(0),
        max_guesses: turns.iter().map(|&(_, n)| n).max().unwrap_or(0),
        distribution,
        worst_words,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
