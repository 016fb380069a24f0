//! Operations for model-based testing.
//!
//! Operations represent every call a caller can make on a lock. They are
//! generated randomly (proptest strategies or `arbitrary` from fuzz input)
//! and applied to both the model and the real implementation.

use arbitrary::Arbitrary;

/// Compact dial input.
///
/// Most values map to uppercase letters so random sequences reach
/// interesting lock states; the rest map to characters the lock must reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Arbitrary)]
pub struct DialInput(pub u8);

impl DialInput {
    /// Expand to the character fed to the dial.
    pub fn to_char(self) -> char {
        match self.0 % 32 {
            n @ 0..=25 => char::from(b'A' + n),
            26 => 'a',
            27 => 'z',
            28 => '0',
            29 => ' ',
            30 => '@',
            _ => 'É',
        }
    }
}

/// Compact combination input.
///
/// Expands to a string of up to four characters. The length class picks
/// empty, short, long or (most often) exactly three characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Arbitrary)]
pub struct ComboInput {
    /// Characters, cycled to the chosen length.
    pub chars: [DialInput; 3],
    /// Length hint (0 empty, 1 two chars, 2 four chars, otherwise three).
    pub len_class: u8,
}

impl ComboInput {
    /// Three-letter input from a valid string. Non-letters map to `a`.
    pub fn letters(text: &str) -> Self {
        let mut chars = [DialInput(26); 3];
        for (slot, c) in chars.iter_mut().zip(text.bytes()) {
            if c.is_ascii_uppercase() {
                *slot = DialInput(c - b'A');
            }
        }
        Self { chars, len_class: 3 }
    }

    /// Expand to the string passed to the lock.
    pub fn to_text(self) -> String {
        let len = match self.len_class % 8 {
            0 => 0,
            1 => 2,
            2 => 4,
            _ => 3,
        };

        self.chars.iter().cycle().take(len).map(|c| c.to_char()).collect()
    }
}

/// Operations that can be applied to a lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Arbitrary)]
pub enum Operation {
    /// Turn the dial.
    SetPosition {
        /// Character to dial.
        position: DialInput,
    },

    /// Attempt to open.
    Open,

    /// Force closed.
    Lock,

    /// Close and re-key if open.
    LockAndChangeCombination {
        /// New combination.
        combination: ComboInput,
    },
}

/// Result of applying an operation.
///
/// Used to compare model and real lock behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationResult {
    /// Operation succeeded.
    Ok,

    /// Operation failed with an expected error.
    Error(OperationError),
}

/// Expected errors that can occur during operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationError {
    /// Dial character rejected.
    InvalidPosition,

    /// Combination string rejected.
    InvalidCombination,
}

impl OperationResult {
    /// Check if operation succeeded.
    pub fn is_ok(&self) -> bool {
        matches!(self, OperationResult::Ok)
    }

    /// Check if operation failed.
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dial_input_mostly_letters() {
        let letters = (0..=u8::MAX).filter(|n| DialInput(*n).to_char().is_ascii_uppercase()).count();
        assert_eq!(letters, 26 * 8);
    }

    #[test]
    fn combo_input_lengths() {
        let input = ComboInput { chars: [DialInput(0), DialInput(1), DialInput(2)], len_class: 0 };
        assert_eq!(input.to_text(), "");
        assert_eq!(ComboInput { len_class: 1, ..input }.to_text(), "AB");
        assert_eq!(ComboInput { len_class: 2, ..input }.to_text(), "ABCA");
        assert_eq!(ComboInput { len_class: 7, ..input }.to_text(), "ABC");
    }

    #[test]
    fn combo_input_from_letters() {
        assert_eq!(ComboInput::letters("XYZ").to_text(), "XYZ");
        assert_eq!(ComboInput::letters("X1Z").to_text(), "XaZ");
    }
}
