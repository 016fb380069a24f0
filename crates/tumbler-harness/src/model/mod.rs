//! Reference model for model-based testing.
//!
//! The model is a simplified implementation that captures the intended
//! behavior of the lock without the ring buffer or typed letters. It serves
//! as the oracle against which the real lock is verified.
//!
//! # Design Principles
//!
//! - Simplicity: The model should be obviously correct
//! - Behavior not implementation: Captures WHAT, not HOW
//! - Deterministic: Same inputs produce same outputs

mod lock;
pub mod operation;

pub use lock::{ModelLock, ObservableState};
pub use operation::{ComboInput, DialInput, Operation, OperationError, OperationResult};
