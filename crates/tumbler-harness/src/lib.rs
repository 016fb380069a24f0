//! Model-based testing harness for the tumbler lock.
//!
//! Provides a naive reference model of the lock, a wrapper that gives the
//! real lock the same interface, and compact operation types that proptest
//! strategies and fuzz input both expand into lock calls.

#![forbid(unsafe_code)]

pub mod model;
pub mod real;

pub use model::{
    ComboInput, DialInput, ModelLock, ObservableState, Operation, OperationError, OperationResult,
};
pub use real::RealLock;
