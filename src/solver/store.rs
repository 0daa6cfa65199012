//! Candidate word store
//!
//! Holds a corpus of unique 5-letter words and the letter statistics the ranker
//! scores against. Pruning never mutates a store: it returns a new snapshot with
//! its own empty statistics cache, so stale frequencies can never leak across a
//! change of word set.

use crate::core::{ALPHABET_SIZE, Board, WORD_LEN, Word, letter_index};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::io::{self, BufRead};
use std::sync::OnceLock;

/// Letter frequencies over a word set
#[derive(Debug, Clone, PartialEq)]
pub struct LetterStats {
    presence: [f64; ALPHABET_SIZE],
    positional: [[f64; ALPHABET_SIZE]; WORD_LEN],
}

impl LetterStats {
    /// Count letters over `words`
    ///
    /// An empty word set yields all-zero tables.
    #[must_use]
    pub fn compute(words: &[Word]) -> Self {
        let mut presence = [0usize; ALPHABET_SIZE];
        let mut positional = [[0usize; ALPHABET_SIZE]; WORD_LEN];

        for word in words {
            for letter in word.letters().iter() {
                presence[letter_index(letter)] += 1;
            }
            for (i, &letter) in word.chars().iter().enumerate() {
                positional[i][letter_index(letter)] += 1;
            }
        }

        let total = words.len().max(1) as f64;
        Self {
            presence: presence.map(|count| count as f64 / total),
            positional: positional.map(|row| row.map(|count| count as f64 / total)),
        }
    }

    /// Fraction of words containing `letter` anywhere
    #[inline]
    #[must_use]
    pub const fn presence(&self, letter: u8) -> f64 {
        self.presence[letter_index(letter)]
    }

    /// Fraction of words with `letter` at `position`
    #[inline]
    #[must_use]
    pub const fn positional(&self, position: usize, letter: u8) -> f64 {
        self.positional[position][letter_index(letter)]
    }
}

/// A corpus of candidate words
///
/// Words are unique and kept in alphabetical order.
#[derive(Debug, Clone, Default)]
pub struct CandidateStore {
    words: Vec<Word>,
    stats: OnceLock<LetterStats>,
}

impl CandidateStore {
    /// Read a newline-delimited word list
    ///
    /// A line is kept if, trimmed and upper-cased, it is exactly 5 letters A-Z.
    /// Anything else is skipped without error.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if reading from `source` fails.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::solver::CandidateStore;
    ///
    /// let text = "crane\nSLATE\n  crate  \nnot-a-word\nab\ncrane\n";
    /// let store = CandidateStore::load(text.as_bytes()).unwrap();
    /// assert_eq!(store.size(), 3);
    /// ```
    pub fn load<R: BufRead>(source: R) -> io::Result<Self> {
        let mut unique = FxHashSet::default();
        for line in source.lines() {
            if let Ok(word) = Word::new(&line?) {
                unique.insert(word);
            }
        }
        Ok(Self::from_unique(unique))
    }

    /// Build a store from in-memory strings, skipping invalid entries
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let unique: FxHashSet<Word> = words
            .into_iter()
            .filter_map(|text| Word::new(text.as_ref()).ok())
            .collect();
        Self::from_unique(unique)
    }

    fn from_unique(unique: FxHashSet<Word>) -> Self {
        let mut words: Vec<Word> = unique.into_iter().collect();
        words.sort_unstable();
        Self::from_sorted(words)
    }

    fn from_sorted(words: Vec<Word>) -> Self {
        Self {
            words,
            stats: OnceLock::new(),
        }
    }

    /// Number of words in the store
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The words, alphabetically
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.binary_search(word).is_ok()
    }

    /// The words consistent with `board`, as a new store
    ///
    /// Monotonic and idempotent: the result is never larger than `self`, and
    /// pruning it again with the same board changes nothing.
    #[must_use]
    pub fn prune(&self, board: &Board) -> Self {
        let words: Vec<Word> = self
            .words
            .par_iter()
            .filter(|word| board.admits(word))
            .copied()
            .collect();
        Self::from_sorted(words)
    }

    /// Letter statistics of the current words, computed on first use
    pub fn stats(&self) -> &LetterStats {
        self.stats.get_or_init(|| LetterStats::compute(&self.words))
    }

    /// Fraction of words containing `letter`
    #[must_use]
    pub fn letter_presence_frequency(&self, letter: u8) -> f64 {
        self.stats().presence(letter)
    }

    /// Fraction of words having `letter` at `position`
    #[must_use]
    pub fn position_letter_frequency(&self, position: usize, letter: u8) -> f64 {
        self.stats().positional(position, letter)
    }
}
