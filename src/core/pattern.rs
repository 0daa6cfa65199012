//! Known-letter pattern
//!
//! A pattern is the 5-slot picture of the answer built from exact-match feedback:
//! each slot is either a confirmed letter or unknown. Its text form uses `.` for
//! unknown slots, e.g. `"CRA.E"`.

use super::letters::{LetterSet, normalize_letter};
use super::word::{WORD_LEN, Word};
use super::InputError;
use std::fmt;
use std::str::FromStr;

/// Placeholder used for unknown slots when printing
pub const UNKNOWN_SLOT: char = '.';

/// The confirmed letters of the answer, slot by slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pattern([Option<u8>; WORD_LEN]);

impl Pattern {
    /// A pattern with every slot unknown
    pub const UNKNOWN: Self = Self([None; WORD_LEN]);

    #[inline]
    #[must_use]
    pub const fn new(slots: [Option<u8>; WORD_LEN]) -> Self {
        Self(slots)
    }

    /// The confirmed letter at `position`, if any
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn slot(&self, position: usize) -> Option<u8> {
        self.0[position]
    }

    #[inline]
    #[must_use]
    pub const fn slots(&self) -> &[Option<u8>; WORD_LEN] {
        &self.0
    }

    /// True if `letter` is confirmed at any slot
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.0.contains(&Some(letter))
    }

    /// Letters confirmed at some slot
    #[must_use]
    pub fn letters(&self) -> LetterSet {
        self.0.iter().flatten().copied().collect()
    }

    /// Number of confirmed slots
    #[must_use]
    pub fn known_count(&self) -> usize {
        self.0.iter().flatten().count()
    }

    /// The fully known word, once every slot is confirmed
    #[must_use]
    pub fn as_word(&self) -> Option<Word> {
        let mut chars = [0u8; WORD_LEN];
        for (dst, slot) in chars.iter_mut().zip(self.0) {
            *dst = slot?;
        }
        Some(Word::from_letters(chars))
    }

    /// Fold newer exact-match feedback into this pattern
    ///
    /// A slot that is already confirmed keeps its letter; only unknown slots are
    /// filled from `other`.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Pattern;
    ///
    /// let known: Pattern = "C....".parse().unwrap();
    /// let newer: Pattern = "..A.E".parse().unwrap();
    /// assert_eq!(known.merge(&newer).to_string(), "C.A.E");
    /// ```
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        let mut slots = self.0;
        for (slot, newer) in slots.iter_mut().zip(other.0) {
            if slot.is_none() {
                *slot = newer;
            }
        }
        Self(slots)
    }

    /// Parse a pattern such as `"cra.e"`
    ///
    /// Accepts letters (any case) for confirmed slots and `.`, `_` or `?` for
    /// unknown slots.
    ///
    /// # Errors
    /// Returns `InputError` if the text is not 5 characters long or holds any
    /// other character.
    pub fn parse(text: &str) -> Result<Self, InputError> {
        let text = text.trim();
        let len = text.chars().count();
        if len != WORD_LEN {
            return Err(InputError::InvalidLength(len));
        }

        let mut slots = [None; WORD_LEN];
        for (slot, ch) in slots.iter_mut().zip(text.chars()) {
            *slot = match ch {
                '.' | '_' | '?' => None,
                _ => Some(normalize_letter(ch).ok_or(InputError::InvalidCharacter(ch))?),
            };
        }

        Ok(Self(slots))
    }
}

impl FromStr for Pattern {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in self.0 {
            let ch = slot.map_or(UNKNOWN_SLOT, char::from);
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
