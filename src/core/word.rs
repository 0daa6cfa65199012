//! Word representation
//!
//! A Word stores a 5-letter word as upper-case ASCII bytes. It is `Copy` so corpora
//! can be pruned into fresh snapshots without allocation per word.

use super::letters::{LetterSet, normalize_letter};
use super::InputError;
use std::fmt;
use std::str::FromStr;

/// Fixed word length for the game
pub const WORD_LEN: usize = 5;

/// A 5-letter word, upper-cased
///
/// Ordering is alphabetical, which the ranker relies on for tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    chars: [u8; WORD_LEN],
    letters: LetterSet,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and letters are upper-cased.
    ///
    /// # Errors
    /// Returns `InputError` if:
    /// - Length is not exactly 5
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, InputError> {
        let text = text.trim();
        let len = text.chars().count();
        if len != WORD_LEN {
            return Err(InputError::InvalidLength(len));
        }

        let mut chars = [0u8; WORD_LEN];
        for (slot, ch) in chars.iter_mut().zip(text.chars()) {
            *slot = normalize_letter(ch).ok_or(InputError::InvalidCharacter(ch))?;
        }

        Ok(Self::from_letters(chars))
    }

    /// Build a word from letters already known to be upper-case A-Z
    pub(crate) fn from_letters(chars: [u8; WORD_LEN]) -> Self {
        Self {
            chars,
            letters: chars.iter().copied().collect(),
        }
    }

    /// Get the word as a string slice
    ///
    /// # Panics
    /// Will not panic - the bytes are validated ASCII letters.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.chars).expect("word bytes are ASCII letters")
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: u8) -> bool {
        self.letters.contains(letter)
    }

    /// The distinct letters of the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }
}

impl FromStr for Word {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
