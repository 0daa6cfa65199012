//! Display functions for command results

use super::formatters::{colored_tiles, create_progress_bar, join_words};
use crate::commands::{BenchmarkResult, HintResult};
use crate::solver::Solution;
use colored::Colorize;

/// Print the suggested guesses for a position
///
/// When few candidates remain they are listed first. With two or fewer the
/// candidates themselves are the guesses.
pub fn print_hint(result: &HintResult) {
    let suggestion = &result.suggestion;
    let remaining = suggestion.remaining().size();

    if let Some(words) = result.listed_candidates() {
        println!("Possible words: {}", join_words(words));
    }

    let unit = if suggestion.is_endgame() { "word(s)" } else { "words" };
    for (i, pick) in suggestion.picks().iter().enumerate() {
        if i == 0 {
            println!(
                "Guess: {} {:.3} ({remaining} {unit} left)",
                pick.word.text().bright_yellow().bold(),
                pick.score
            );
        } else {
            println!("       {} {:.3}", pick.word, pick.score);
        }
    }
}

/// Print the guesses that solved a target
pub fn print_solution(solution: &Solution, verbose: bool) {
    println!("{} => {}", solution.target, join_words(&solution.guesses()));

    if verbose {
        for (i, (step, marks)) in solution.steps.iter().zip(solution.marks()).enumerate() {
            println!(
                "  {}. {} {:.3} ({} left)",
                i + 1,
                colored_tiles(&step.guess, &marks),
                step.score,
                step.remaining
            );
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("Min: {}", result.min_guesses);
    println!("Max: {}", result.max_guesses);
    println!("Ave: {}", result.average_guesses);

    for (&guesses, &count) in &result.distribution {
        let pct = count as f64 / result.total_words as f64 * 100.0;
        println!(
            "{guesses} guess: {count} {} {}",
            create_progress_bar(pct, 100.0, 30).green(),
            format!("({pct:.1}%)").bright_black()
        );
    }

    println!(
        "\n{} words in {:.2}s ({:.1} words/s)",
        result.total_words,
        result.duration.as_secs_f64(),
        result.words_per_second
    );

    if !result.worst_words.is_empty() {
        let worst: Vec<String> = result
            .worst_words
            .iter()
            .map(|(word, n)| format!("{word}({n})"))
            .collect();
        println!("Hardest: {}", worst.join(", ").yellow());
    }
}
