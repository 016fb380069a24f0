//! Real lock wrapper that mirrors the model's interface.

use tumbler_core::{Letter, Lock, LockError};

use crate::model::{ObservableState, Operation, OperationError, OperationResult};

/// Wraps a [`Lock`] so operations and observations line up with
/// [`crate::ModelLock`].
#[derive(Debug, Clone)]
pub struct RealLock {
    lock: Lock,
}

impl RealLock {
    /// Create an open lock.
    pub fn new(secret: &str) -> Result<Self, OperationError> {
        Lock::new(secret).map(|lock| Self { lock }).map_err(classify)
    }

    /// The wrapped lock.
    pub fn lock(&self) -> &Lock {
        &self.lock
    }

    /// Mutable access to the wrapped lock.
    pub fn lock_mut(&mut self) -> &mut Lock {
        &mut self.lock
    }

    /// Apply an operation and return the result.
    pub fn apply(&mut self, op: &Operation) -> OperationResult {
        let result = match op {
            Operation::SetPosition { position } => self.lock.set_position(position.to_char()),
            Operation::Open => {
                self.lock.open();
                Ok(())
            },
            Operation::Lock => {
                self.lock.lock();
                Ok(())
            },
            Operation::LockAndChangeCombination { combination } => {
                self.lock.lock_and_change_combination(&combination.to_text())
            },
        };

        match result {
            Ok(()) => OperationResult::Ok,
            Err(err) => OperationResult::Error(classify(err)),
        }
    }

    /// Extract observable state for comparison.
    pub fn observable_state(&self) -> ObservableState {
        ObservableState {
            is_open: self.lock.is_open(),
            window: self.lock.window().iter().map(|slot| slot.map(Letter::as_char)).collect(),
        }
    }
}

fn classify(err: LockError) -> OperationError {
    match err {
        LockError::InvalidCombination { .. } => OperationError::InvalidCombination,
        LockError::InvalidPosition { .. } => OperationError::InvalidPosition,
    }
}
