//! Formatting utilities for terminal output

use crate::core::{Mark, Marks, Word};
use colored::Colorize;

/// Join words with commas, e.g. `CRANE,SLATE`
#[must_use]
pub fn join_words(words: &[Word]) -> String {
    words.iter().map(Word::text).collect::<Vec<_>>().join(",")
}

/// Render a guess as colored tiles
#[must_use]
pub fn colored_tiles(guess: &Word, marks: &Marks) -> String {
    guess
        .chars()
        .iter()
        .zip(marks.iter())
        .map(|(&letter, mark)| {
            let tile = format!(" {} ", letter as char).bold();
            match mark {
                Mark::Exact => tile.black().on_green(),
                Mark::Present => tile.black().on_yellow(),
                Mark::Absent => tile.white().on_bright_black(),
            }
            .to_string()
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_words_uses_commas() {
        let words = [Word::new("crane").unwrap(), Word::new("slate").unwrap()];
        assert_eq!(join_words(&words), "CRANE,SLATE");
        assert_eq!(join_words(&[]), "");
    }

    #[test]
    fn colored_tiles_keep_letters() {
        colored::control::set_override(false);
        let guess = Word::new("crane").unwrap();
        let marks = Marks::parse("GY---").unwrap();
        assert_eq!(colored_tiles(&guess, &marks), " C  R  A  N  E ");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
