//! Constraint board
//!
//! Turns what is known about the answer (confirmed slots, letters known to be
//! present, and every word guessed so far) into per-slot letter filters.
//!
//! Derivation rules:
//! - A guessed letter that did not match its slot and was never confirmed
//!   present is excluded from every slot.
//! - An unknown slot allows every non-excluded letter, minus any present letter
//!   that was already guessed at that slot (present but misplaced).
//! - A confirmed slot allows only its letter.

use super::letters::LetterSet;
use super::pattern::Pattern;
use super::word::{WORD_LEN, Word};
use log::trace;

/// Letter constraints derived from the game so far
///
/// All derived sets are computed once in [`Board::new`]; a board never changes
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pattern: Pattern,
    present: LetterSet,
    history: Vec<Word>,
    excluded: LetterSet,
    allowed: LetterSet,
    positions: [LetterSet; WORD_LEN],
}

impl Board {
    /// Build a board from the known pattern, the letters known to be present,
    /// and the guesses played so far
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Board, LetterSet, Word};
    ///
    /// let board = Board::new(
    ///     "CRA.E".parse().unwrap(),
    ///     LetterSet::parse("CRAE").unwrap(),
    ///     vec![Word::new("crane").unwrap()],
    /// );
    ///
    /// assert!(board.excluded().contains(b'N'));
    /// assert_eq!(board.position_candidates(0), LetterSet::single(b'C'));
    /// assert!(board.admits(&Word::new("crate").unwrap()));
    /// assert!(!board.admits(&Word::new("crane").unwrap()));
    /// ```
    #[must_use]
    pub fn new(pattern: Pattern, present: LetterSet, history: Vec<Word>) -> Self {
        let mut excluded = LetterSet::EMPTY;
        for guess in &history {
            for (i, &letter) in guess.chars().iter().enumerate() {
                if pattern.slot(i) != Some(letter) && !present.contains(letter) {
                    excluded.insert(letter);
                }
            }
        }

        let allowed = LetterSet::ALL.difference(excluded);

        let mut positions = [allowed; WORD_LEN];
        for (i, candidates) in positions.iter_mut().enumerate() {
            if let Some(letter) = pattern.slot(i) {
                *candidates = LetterSet::single(letter);
                continue;
            }
            for guess in &history {
                let letter = guess.char_at(i);
                if present.contains(letter) {
                    candidates.remove(letter);
                }
            }
        }

        trace!(
            "board {pattern}: present={present} excluded={excluded} positions={positions:?}"
        );

        Self {
            pattern,
            present,
            history,
            excluded,
            allowed,
            positions,
        }
    }

    /// A board with no information at all
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Pattern::UNKNOWN, LetterSet::EMPTY, Vec::new())
    }

    #[inline]
    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Letters known to occur somewhere in the answer
    #[inline]
    #[must_use]
    pub const fn confirmed_present(&self) -> LetterSet {
        self.present
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Word] {
        &self.history
    }

    /// Letters proven absent from the answer
    #[inline]
    #[must_use]
    pub const fn excluded(&self) -> LetterSet {
        self.excluded
    }

    /// The alphabet minus the excluded letters
    #[inline]
    #[must_use]
    pub const fn global_alphabet(&self) -> LetterSet {
        self.allowed
    }

    /// Letters still possible at `position`
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn position_candidates(&self, position: usize) -> LetterSet {
        self.positions[position]
    }

    /// True if `word` satisfies every constraint on the board
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        self.present.is_subset(word.letters())
            && word
                .chars()
                .iter()
                .zip(&self.positions)
                .all(|(&letter, candidates)| candidates.contains(letter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn board(pattern: &str, present: &str, history: &[&str]) -> Board {
        Board::new(
            pattern.parse().unwrap(),
            LetterSet::parse(present).unwrap(),
            history.iter().map(|w| word(w)).collect(),
        )
    }

    #[test]
    fn empty_board_allows_everything() {
        let board = Board::empty();

        assert!(board.excluded().is_empty());
        assert_eq!(board.global_alphabet(), LetterSet::ALL);
        for i in 0..WORD_LEN {
            assert_eq!(board.position_candidates(i), LetterSet::ALL);
        }
        assert!(board.admits(&word("zzzzz")));
    }

    #[test]
    fn unmatched_unconfirmed_letters_are_excluded() {
        let board = board(".....", "", &["crane"]);

        assert_eq!(board.excluded(), LetterSet::parse("crane").unwrap());
        assert_eq!(board.global_alphabet().len(), 21);
        assert!(!board.position_candidates(3).contains(b'C'));
    }

    #[test]
    fn confirmed_slot_is_singleton() {
        let board = board("C....", "C", &["crane"]);

        assert_eq!(board.position_candidates(0), LetterSet::single(b'C'));
        assert!(!board.excluded().contains(b'C'));
        // R, A, N, E were guessed, not matched and not present
        assert_eq!(board.excluded(), LetterSet::parse("rane").unwrap());
    }

    #[test]
    fn present_letter_is_removed_only_from_guessed_slot() {
        // R present but not at slot 1
        let board = board(".....", "R", &["crane"]);

        assert!(!board.position_candidates(1).contains(b'R'));
        for i in [0, 2, 3, 4] {
            assert!(board.position_candidates(i).contains(b'R'));
        }
        assert!(!board.excluded().contains(b'R'));
    }

    #[test]
    fn letter_matched_at_one_slot_is_not_excluded_by_that_slot() {
        // E confirmed at slot 4 and never marked present: the slot-4 guess of E
        // is not evidence of absence, but the slot-0 guess in EERIE is
        let board = board("....E", "", &["eerie"]);

        assert!(board.excluded().contains(b'E'));
        assert_eq!(board.position_candidates(4), LetterSet::single(b'E'));
    }

    #[test]
    fn admits_requires_present_letters() {
        let board = board(".....", "Z", &[]);

        assert!(!board.admits(&word("crane")));
        assert!(board.admits(&word("blitz")));
    }

    #[test]
    fn admits_respects_position_candidates() {
        let board = board("CRA.E", "CRAE", &["crane"]);

        assert!(board.admits(&word("crate")));
        assert!(board.admits(&word("craze")));
        assert!(!board.admits(&word("crane"))); // N excluded
        assert!(!board.admits(&word("grate"))); // slot 0 fixed
    }
}
