//! Letter-frequency guess ranking
//!
//! A guess is worth more when its letters split the remaining candidates evenly.
//! Each distinct letter of the guess gets a relevance value `v` (the fraction of
//! candidates it would "hit"), transformed into `v/(1-v)` below one half and
//! `(1-v)/v` above it, which peaks at 1 when `v = 0.5`. The score is the sum.

use super::store::{CandidateStore, LetterStats};
use crate::core::{ALPHABET_SIZE, Board, LetterSet, Pattern, Word, letter_index};
use rayon::prelude::*;
use std::cmp::Ordering;

/// A guess with its score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedGuess {
    pub score: f64,
    pub word: Word,
}

impl RankedGuess {
    /// Best first: higher score, then alphabetical
    fn rank_order(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.word.cmp(&other.word))
    }
}

/// Discriminating power of a letter hitting a fraction `v` of candidates
#[inline]
#[must_use]
pub fn informativeness(v: f64) -> f64 {
    if v < 0.5 { v / (1.0 - v) } else { (1.0 - v) / v }
}

/// Score `word` as the next guess
///
/// `stats` must be the statistics of the candidates still consistent with
/// `board`. Per distinct letter the maximum relevance over its occurrences is
/// used:
/// - at an unknown slot, the letter's frequency at that slot;
/// - at a confirmed slot, the letter's overall presence frequency, unless the
///   letter is already confirmed somewhere in the pattern, in which case it
///   adds nothing.
///
/// # Examples
/// ```
/// use wordle_assist::core::{Board, Word};
/// use wordle_assist::solver::{CandidateStore, ranker::score};
///
/// let store = CandidateStore::from_words(["crane", "slate", "blitz", "pious"]);
/// let board = Board::empty();
///
/// let good = score(&Word::new("slate").unwrap(), &board, store.stats());
/// let poor = score(&Word::new("xxxxx").unwrap(), &board, store.stats());
/// assert!(good > poor);
/// assert_eq!(poor, 0.0);
/// ```
#[must_use]
pub fn score(word: &Word, board: &Board, stats: &LetterStats) -> f64 {
    let relevance = letter_relevance(word, board.pattern(), stats);

    // Sum in first-occurrence order
    let mut seen = LetterSet::EMPTY;
    let mut total = 0.0;
    for &letter in word.chars() {
        if !seen.contains(letter) {
            seen.insert(letter);
            total += informativeness(relevance[letter_index(letter)]);
        }
    }
    total
}

fn letter_relevance(word: &Word, pattern: &Pattern, stats: &LetterStats) -> [f64; ALPHABET_SIZE] {
    let mut relevance = [0.0_f64; ALPHABET_SIZE];

    for (i, &letter) in word.chars().iter().enumerate() {
        let value = match pattern.slot(i) {
            None => stats.positional(i, letter),
            Some(_) if !pattern.contains(letter) => stats.presence(letter),
            Some(_) => 0.0,
        };
        let entry = &mut relevance[letter_index(letter)];
        *entry = entry.max(value);
    }

    relevance
}

/// Rank `words` as guesses and keep the best `top_k`
///
/// Results are ordered by score, highest first; equal scores are ordered
/// alphabetically.
#[must_use]
pub fn find_best(
    words: &[Word],
    board: &Board,
    stats: &CandidateStore,
    top_k: usize,
) -> Vec<RankedGuess> {
    let letter_stats = stats.stats();

    let mut ranked: Vec<RankedGuess> = words
        .par_iter()
        .map(|&word| RankedGuess {
            score: score(&word, board, letter_stats),
            word,
        })
        .collect();

    ranked.sort_by(RankedGuess::rank_order);
    ranked.truncate(top_k);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| word(t)).collect()
    }

    #[test]
    fn informativeness_peaks_at_half() {
        assert!((informativeness(0.5) - 1.0).abs() < 1e-12);
        assert_eq!(informativeness(0.0), 0.0);
        assert_eq!(informativeness(1.0), 0.0);
        assert!((informativeness(0.25) - 1.0 / 3.0).abs() < 1e-12);
        assert!((informativeness(0.75) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn score_uses_positional_frequency_at_unknown_slots() {
        // C at slot 0 in half the words, nothing else varies usefully
        let store = CandidateStore::from_words(["caaaa", "baaaa"]);
        let board = Board::empty();

        let s = score(&word("czzzz"), &board, store.stats());
        assert!((s - 1.0).abs() < 1e-12);
    }

    #[test]
    fn repeated_letter_takes_maximum_not_sum() {
        // E at slot 0 in 1/2 of words, at slot 1 in 1/4
        let store = CandidateStore::from_words(["eaaaa", "ebaaa", "aeaaa", "bbaaa"]);
        let board = Board::empty();

        let single = score(&word("ezzzz"), &board, store.stats());
        let double = score(&word("eezzz"), &board, store.stats());
        assert!((single - 1.0).abs() < 1e-12);
        assert!((double - single).abs() < 1e-12);
    }

    #[test]
    fn confirmed_slot_uses_presence_frequency() {
        let store = CandidateStore::from_words(["cabot", "cubed", "cider", "comet"]);
        let board = Board::new(
            "C....".parse().unwrap(),
            LetterSet::single(b'C'),
            Vec::new(),
        );

        // B sits at the confirmed slot 0: global frequency of B is 2/4
        let s = score(&word("bzzzz"), &board, store.stats());
        assert!((s - 1.0).abs() < 1e-12);
    }

    #[test]
    fn letter_already_in_pattern_adds_nothing_at_confirmed_slot() {
        let store = CandidateStore::from_words(["cabot", "cubed", "cider", "comet"]);
        let board = Board::new(
            "C....".parse().unwrap(),
            LetterSet::single(b'C'),
            Vec::new(),
        );

        assert_eq!(score(&word("czzzz"), &board, store.stats()), 0.0);
    }

    #[test]
    fn find_best_orders_by_score_then_alphabet() {
        let store = CandidateStore::from_words(["caaaa", "baaaa"]);
        let board = Board::empty();
        // DZZZZ and XZZZZ both score 0, CZZZZ and BZZZZ both score 1
        let guesses = words(&["xzzzz", "czzzz", "dzzzz", "bzzzz"]);

        let ranked = find_best(&guesses, &board, &store, 4);
        let order: Vec<&str> = ranked.iter().map(|r| r.word.text()).collect();
        assert_eq!(order, ["BZZZZ", "CZZZZ", "DZZZZ", "XZZZZ"]);
        assert!(ranked[0].score >= ranked[3].score);
    }

    #[test]
    fn equal_contributions_in_different_letter_order_tie_exactly() {
        // ABCDE and VUTSR get the same positional fractions slot by slot
        // (1,1,1,1,2 out of 15) but their letters sort in opposite orders
        let store = CandidateStore::from_words([
            "abcde", "vutse", "hhhhr", "iiiir", "jjjjj", "kkkkk", "lllll", "mmmmm", "nnnnn",
            "ooooo", "ppppp", "qqqqq", "wwwww", "xxxxx", "yyyyy",
        ]);
        let board = Board::empty();

        let first = score(&word("abcde"), &board, store.stats());
        let second = score(&word("vutsr"), &board, store.stats());
        assert_eq!(first.to_bits(), second.to_bits());

        let ranked = find_best(&words(&["vutsr", "abcde"]), &board, &store, 2);
        let order: Vec<&str> = ranked.iter().map(|r| r.word.text()).collect();
        assert_eq!(order, ["ABCDE", "VUTSR"]);
    }

    #[test]
    fn find_best_keeps_top_k() {
        let store = CandidateStore::from_words(["crane", "slate", "blitz"]);
        let guesses = words(&["crane", "slate", "blitz", "xxxxx"]);

        assert_eq!(find_best(&guesses, &Board::empty(), &store, 2).len(), 2);
        assert_eq!(find_best(&guesses, &Board::empty(), &store, 10).len(), 4);
        assert!(find_best(&[], &Board::empty(), &store, 3).is_empty());
    }
}
