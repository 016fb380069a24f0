//! Lock error types.

use thiserror::Error;

/// Why a string was rejected as a combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CombinationDefect {
    /// No characters at all.
    #[error("combination is empty")]
    Empty,

    /// Not exactly three characters.
    #[error("expected 3 letters, got {len}")]
    WrongLength {
        /// Number of characters supplied.
        len: usize,
    },

    /// A character outside `A`-`Z`.
    #[error("character {letter:?} at index {index} is not an uppercase letter A-Z")]
    InvalidLetter {
        /// Position of the offending character.
        index: usize,
        /// The offending character.
        letter: char,
    },
}

/// Errors from lock operations.
///
/// Every variant is a violated precondition of the call that returned it.
/// The lock is left exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LockError {
    /// Secret or re-key value is not exactly three uppercase letters.
    #[error("invalid combination {input:?}: {reason}")]
    InvalidCombination {
        /// The rejected input.
        input: String,
        /// What is wrong with it.
        reason: CombinationDefect,
    },

    /// Dial position is not an uppercase letter.
    #[error("invalid dial position {position:?}: expected an uppercase letter A-Z")]
    InvalidPosition {
        /// The rejected character.
        position: char,
    },
}
