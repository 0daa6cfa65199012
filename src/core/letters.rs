//! The 26-letter alphabet and compact letter sets
//!
//! Every letter handled by the solver is an upper-case ASCII byte `b'A'..=b'Z'`.
//! Sets of letters are stored as a 26-bit mask so membership tests, unions and
//! differences are single integer operations in the scoring hot loop.

use super::InputError;
use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// The alphabet in index order
pub const ALPHABET: [u8; ALPHABET_SIZE] = *b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Index of an upper-case letter within [`ALPHABET`]
///
/// # Panics
/// Panics in debug mode if `letter` is not in `b'A'..=b'Z'`.
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_uppercase(), "letter must be A-Z");
    (letter - b'A') as usize
}

/// Normalize a character into an alphabet letter, if it is one
#[inline]
#[must_use]
pub const fn normalize_letter(ch: char) -> Option<u8> {
    if ch.is_ascii_alphabetic() {
        Some((ch as u8).to_ascii_uppercase())
    } else {
        None
    }
}

/// A set of alphabet letters backed by a bitmask
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Every letter A-Z
    pub const ALL: Self = Self((1 << ALPHABET_SIZE) - 1);

    /// A set holding exactly one letter
    #[inline]
    #[must_use]
    pub const fn single(letter: u8) -> Self {
        Self(1 << letter_index(letter))
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & (1 << letter_index(letter)) != 0
    }

    #[inline]
    pub fn insert(&mut self, letter: u8) {
        self.0 |= 1 << letter_index(letter);
    }

    #[inline]
    pub fn remove(&mut self, letter: u8) {
        self.0 &= !(1 << letter_index(letter));
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// True if every letter of `self` is also in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        ALPHABET.into_iter().filter(move |&letter| self.contains(letter))
    }

    /// Parse a run of letters such as `"crae"`
    ///
    /// Case-insensitive; repeated letters are fine.
    ///
    /// # Errors
    /// Returns `InputError::InvalidCharacter` on anything outside A-Z.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::LetterSet;
    ///
    /// let set = LetterSet::parse("crae").unwrap();
    /// assert!(set.contains(b'C'));
    /// assert_eq!(set.len(), 4);
    /// assert!(LetterSet::parse("c4").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, InputError> {
        text.trim().chars().try_fold(Self::EMPTY, |mut set, ch| {
            let letter = normalize_letter(ch).ok_or(InputError::InvalidCharacter(ch))?;
            set.insert(letter);
            Ok(set)
        })
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{self}}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_holds_every_letter() {
        assert_eq!(LetterSet::ALL.len(), 26);
        assert!(ALPHABET.iter().all(|&l| LetterSet::ALL.contains(l)));
    }

    #[test]
    fn insert_remove() {
        let mut set = LetterSet::EMPTY;
        set.insert(b'Q');
        set.insert(b'Q');
        assert_eq!(set.len(), 1);
        assert!(set.contains(b'Q'));
        set.remove(b'Q');
        assert!(set.is_empty());
    }

    #[test]
    fn set_operations() {
        let abc: LetterSet = b"ABC".iter().copied().collect();
        let bcd: LetterSet = b"BCD".iter().copied().collect();

        assert_eq!(abc.union(bcd).to_string(), "ABCD");
        assert_eq!(abc.difference(bcd).to_string(), "A");
        assert!(LetterSet::single(b'B').is_subset(abc));
        assert!(!abc.is_subset(bcd));
    }

    #[test]
    fn iter_is_alphabetical() {
        let set = LetterSet::parse("zebra").unwrap();
        let letters: Vec<u8> = set.iter().collect();
        assert_eq!(letters, b"ABERZ");
    }

    #[test]
    fn parse_rejects_non_letters() {
        assert_eq!(
            LetterSet::parse("ab-c"),
            Err(InputError::InvalidCharacter('-'))
        );
        assert_eq!(LetterSet::parse("").unwrap(), LetterSet::EMPTY);
    }
}
