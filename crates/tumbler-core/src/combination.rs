//! Dial letters and three-letter combinations.
//!
//! A [`Letter`] is one position on the dial and a [`Combination`] is an
//! ordered triple of them. Neither type can hold an invalid value, so input
//! is validated exactly once, when it is converted.
//!
//! # Ordering
//!
//! Combinations order lexicographically with the first letter varying
//! slowest. [`Combination::rank`] gives the 1-based position in that order:
//!
//! ```text
//! AAA -> 1, AAB -> 2, ..., AAZ -> 26, ABA -> 27, ..., ZZZ -> 17576
//! ```

use std::{fmt, str::FromStr};

use crate::error::{CombinationDefect, LockError};

/// Number of letters in a combination.
pub const COMBINATION_LEN: usize = 3;

/// Number of positions on the dial.
pub const DIAL_SIZE: usize = 26;

/// A single dial position: an uppercase ASCII letter `A`-`Z`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Every dial position in alphabetical order.
    pub const ALL: [Self; DIAL_SIZE] = {
        let mut letters = [Self(b'A'); DIAL_SIZE];
        let mut i = 0;
        while i < DIAL_SIZE {
            letters[i] = Self(b'A' + i as u8);
            i += 1;
        }
        letters
    };

    /// Letter at `index` in the alphabet (`0` is `A`).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Zero-based position in the alphabet.
    pub fn index(self) -> usize {
        usize::from(self.0 - b'A')
    }

    /// The letter as a `char`.
    pub fn as_char(self) -> char {
        char::from(self.0)
    }
}

impl TryFrom<char> for Letter {
    type Error = LockError;

    fn try_from(position: char) -> Result<Self, Self::Error> {
        if position.is_ascii_uppercase() {
            Ok(Self(position as u8))
        } else {
            Err(LockError::InvalidPosition { position })
        }
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.as_char()
    }
}

impl fmt::Debug for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_char())
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Three dial letters, in the order they must be set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Combination([Letter; COMBINATION_LEN]);

impl Combination {
    /// Number of distinct combinations (26^3).
    pub const SPACE: u32 = (DIAL_SIZE * DIAL_SIZE * DIAL_SIZE) as u32;

    /// Parse a combination from exactly three uppercase letters.
    pub fn new(input: &str) -> Result<Self, LockError> {
        input.parse()
    }

    /// Build a combination from already-validated letters.
    pub const fn from_letters(letters: [Letter; COMBINATION_LEN]) -> Self {
        Self(letters)
    }

    /// The letters, first to last.
    pub fn letters(&self) -> [Letter; COMBINATION_LEN] {
        self.0
    }

    /// 1-based lexicographic rank among all combinations.
    pub fn rank(&self) -> u32 {
        let offset = self.0.iter().fold(0, |acc, letter| acc * DIAL_SIZE + letter.index());
        offset as u32 + 1
    }

    /// Combination with the given rank, `None` outside `1..=SPACE`.
    pub fn from_rank(rank: u32) -> Option<Self> {
        if rank == 0 || rank > Self::SPACE {
            return None;
        }

        let mut rest = (rank - 1) as usize;
        let mut letters = [Letter::ALL[0]; COMBINATION_LEN];
        for slot in letters.iter_mut().rev() {
            *slot = Letter::from_index(rest % DIAL_SIZE)?;
            rest /= DIAL_SIZE;
        }

        Some(Self(letters))
    }
}

impl FromStr for Combination {
    type Err = LockError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid =
            |reason| LockError::InvalidCombination { input: input.to_string(), reason };

        if input.is_empty() {
            return Err(invalid(CombinationDefect::Empty));
        }

        let len = input.chars().count();
        if len != COMBINATION_LEN {
            return Err(invalid(CombinationDefect::WrongLength { len }));
        }

        let mut letters = [Letter::ALL[0]; COMBINATION_LEN];
        for (index, (slot, letter)) in letters.iter_mut().zip(input.chars()).enumerate() {
            *slot = Letter::try_from(letter)
                .map_err(|_| invalid(CombinationDefect::InvalidLetter { index, letter }))?;
        }

        Ok(Self(letters))
    }
}

impl TryFrom<&str> for Combination {
    type Error = LockError;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        input.parse()
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|letter| write!(f, "{letter}"))
    }
}
