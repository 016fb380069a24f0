//! Reference model of the lock.
//!
//! Deliberately naive: the window is a `VecDeque` that is shifted by popping
//! the front and pushing the back, and validation is spelled out character by
//! character. It shares no code with `tumbler_core`.

use std::collections::VecDeque;

use super::operation::{Operation, OperationError, OperationResult};

const LEN: usize = 3;

/// Observable lock state for oracle comparison.
///
/// The only state a caller (or a test peeking at the window) can see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservableState {
    /// Whether the lock is open.
    pub is_open: bool,
    /// Window contents, oldest first; `None` is the sentinel.
    pub window: Vec<Option<char>>,
}

/// Model lock - the reference implementation.
#[derive(Debug, Clone)]
pub struct ModelLock {
    secret: String,
    is_open: bool,
    window: VecDeque<Option<char>>,
}

fn is_valid_letter(c: char) -> bool {
    c.is_ascii_uppercase()
}

fn is_valid_combination(text: &str) -> bool {
    text.chars().count() == LEN && text.chars().all(is_valid_letter)
}

impl ModelLock {
    /// Create an open model lock.
    pub fn new(secret: &str) -> Result<Self, OperationError> {
        if !is_valid_combination(secret) {
            return Err(OperationError::InvalidCombination);
        }

        Ok(Self {
            secret: secret.to_string(),
            is_open: true,
            window: std::iter::repeat_n(None, LEN).collect(),
        })
    }

    /// Whether the lock is open.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Current secret.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Apply an operation and return the result.
    pub fn apply(&mut self, op: &Operation) -> OperationResult {
        match op {
            Operation::SetPosition { position } => {
                let c = position.to_char();
                if !is_valid_letter(c) {
                    return OperationResult::Error(OperationError::InvalidPosition);
                }
                self.window.pop_front();
                self.window.push_back(Some(c));
                OperationResult::Ok
            },
            Operation::Open => {
                let dialed: Vec<Option<char>> = self.window.iter().copied().collect();
                let expected: Vec<Option<char>> = self.secret.chars().map(Some).collect();
                if dialed == expected {
                    self.is_open = true;
                } else {
                    self.close();
                }
                OperationResult::Ok
            },
            Operation::Lock => {
                self.close();
                OperationResult::Ok
            },
            Operation::LockAndChangeCombination { combination } => {
                if self.is_open {
                    let text = combination.to_text();
                    if !is_valid_combination(&text) {
                        return OperationResult::Error(OperationError::InvalidCombination);
                    }
                    self.secret = text;
                }
                self.close();
                OperationResult::Ok
            },
        }
    }

    /// Extract observable state for comparison.
    pub fn observable_state(&self) -> ObservableState {
        ObservableState { is_open: self.is_open, window: self.window.iter().copied().collect() }
    }

    fn close(&mut self) {
        self.is_open = false;
        if let Some(newest) = self.window.back_mut() {
            *newest = None;
        }
    }
}
