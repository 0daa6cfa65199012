//! Feedback from playing a guess
//!
//! The solver reduces feedback to two facts: which slots matched exactly (a
//! [`Pattern`]) and which of the guessed letters occur somewhere in the answer.
//! [`Marks`] are the per-tile form a human reads off the game screen.

use super::letters::LetterSet;
use super::pattern::Pattern;
use super::word::{WORD_LEN, Word};
use super::InputError;

/// Feedback for one guess in the form the constraint board consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Feedback {
    /// Letters of the guess that matched the answer at the same slot
    pub pattern: Pattern,
    /// Letters of the guess that occur anywhere in the answer
    pub present: LetterSet,
}

impl Feedback {
    /// Play `guess` against a known `target`
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("crate").unwrap();
    /// let feedback = Feedback::simulate(&guess, &target);
    ///
    /// assert_eq!(feedback.pattern.to_string(), "CRA.E");
    /// assert_eq!(feedback.present.to_string(), "ACER");
    /// ```
    #[must_use]
    pub fn simulate(guess: &Word, target: &Word) -> Self {
        let mut slots = [None; WORD_LEN];
        for (i, slot) in slots.iter_mut().enumerate() {
            if guess.char_at(i) == target.char_at(i) {
                *slot = Some(guess.char_at(i));
            }
        }

        Self {
            pattern: Pattern::new(slots),
            present: guess.letters().intersection(target.letters()),
        }
    }

    /// Convert tiles read from the game into feedback
    ///
    /// An exact tile confirms its slot; exact and present tiles both mark the
    /// letter as present in the answer.
    #[must_use]
    pub fn from_marks(guess: &Word, marks: &Marks) -> Self {
        let mut feedback = Self::default();
        let mut slots = [None; WORD_LEN];

        for (i, mark) in marks.iter().enumerate() {
            let letter = guess.char_at(i);
            match mark {
                Mark::Exact => {
                    slots[i] = Some(letter);
                    feedback.present.insert(letter);
                }
                Mark::Present => feedback.present.insert(letter),
                Mark::Absent => {}
            }
        }

        feedback.pattern = Pattern::new(slots);
        feedback
    }
}

/// One feedback tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Right letter, right slot
    Exact,
    /// Letter occurs elsewhere in the answer
    Present,
    /// Letter does not occur in the answer
    Absent,
}

impl Mark {
    /// Parse a single tile character
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Exact),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// The five tiles shown for a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Marks([Mark; WORD_LEN]);

impl Marks {
    /// Every tile exact
    pub const SOLVED: Self = Self([Mark::Exact; WORD_LEN]);

    #[must_use]
    pub const fn new(marks: [Mark; WORD_LEN]) -> Self {
        Self(marks)
    }

    /// Tiles implied by the feedback rule: exact when the letters match,
    /// present when the guessed letter occurs anywhere in `target`
    #[must_use]
    pub fn between(guess: &Word, target: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LEN];
        for (i, mark) in marks.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            *mark = if letter == target.char_at(i) {
                Mark::Exact
            } else if target.has_letter(letter) {
                Mark::Present
            } else {
                Mark::Absent
            };
        }
        Self(marks)
    }

    /// Parse tiles such as `"GY-G-"` or `"🟩🟨⬜🟩⬜"`
    ///
    /// # Errors
    /// Returns `InputError` on the wrong number of tiles or an unknown tile.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Marks;
    ///
    /// let m1 = Marks::parse("GY-G-").unwrap();
    /// let m2 = Marks::parse("🟩🟨⬜🟩⬜").unwrap();
    /// assert_eq!(m1, m2);
    /// assert_eq!(m1.to_emoji(), "🟩🟨⬜🟩⬜");
    /// ```
    pub fn parse(text: &str) -> Result<Self, InputError> {
        let text = text.trim();
        let len = text.chars().count();
        if len != WORD_LEN {
            return Err(InputError::InvalidLength(len));
        }

        let mut marks = [Mark::Absent; WORD_LEN];
        for (mark, ch) in marks.iter_mut().zip(text.chars()) {
            *mark = Mark::from_char(ch).ok_or(InputError::InvalidCharacter(ch))?;
        }
        Ok(Self(marks))
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mark> {
        self.0.iter()
    }

    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|mark| mark.to_emoji()).collect()
    }
}
