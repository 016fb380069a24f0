//! Tumbler core logic
//!
//! A three-letter combination lock modeled as a pure state machine: no I/O,
//! no time, no randomness. Callers drive it one dial position and one open
//! attempt at a time and observe only whether it is open.
//!
//! # Components
//!
//! - [`combination`]: Dial letters and three-letter combinations
//! - [`window`]: Fixed-capacity rolling window of the last dial positions
//! - [`lock`]: Lock state machine (dialing, open attempts, guard clearing)
//! - [`error`]: Lock error types

#![forbid(unsafe_code)]

pub mod combination;
pub mod error;
pub mod lock;
pub mod window;

pub use combination::{COMBINATION_LEN, Combination, DIAL_SIZE, Letter};
pub use error::{CombinationDefect, LockError};
pub use lock::{DialWindow, Lock, LockState};
pub use window::Window;
